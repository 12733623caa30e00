use thiserror::Error;

pub type CsvResult<T> = std::result::Result<T, CsvError>;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A field lands outside the addressable sheet
    #[error("CSV field at row {row}, column {column} does not fit in a worksheet")]
    TooLarge { row: usize, column: usize },

    #[error(transparent)]
    Document(#[from] gridwriter_core::Error),
}
