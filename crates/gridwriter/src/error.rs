//! Error types for gridwriter

use thiserror::Error;

use crate::store::StoreError;

/// Result type alias using [`ExportError`]
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised by a writer session
#[derive(Debug, Error)]
pub enum ExportError {
    /// `write()` was called with no target configured
    #[error("No write target configured")]
    NoTarget,

    /// A table was appended from an empty record sequence
    #[error("Cannot append a table with no records")]
    EmptyInput,

    /// Chart categories and values are paired positionally
    #[error("Chart series has {categories} categories but {values} values")]
    SeriesLengthMismatch { categories: usize, values: usize },

    /// The session was used after dispose
    #[error("Writer has been disposed")]
    Disposed,

    /// The document rejected an operation
    #[error("Document error: {0}")]
    Document(#[from] gridwriter_core::Error),

    /// Loading or persisting the document failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
