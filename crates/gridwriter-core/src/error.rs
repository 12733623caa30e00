//! Document errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the document model
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row (first) past the last addressable row (second)
    #[error("Row {0} is outside the sheet (max {1})")]
    RowOutOfBounds(u32, u32),

    /// Column (first) past the last addressable column (second)
    #[error("Column {0} is outside the sheet (max {1})")]
    ColumnOutOfBounds(u32, u16),

    #[error("No sheet at index {0} ({1} sheets)")]
    SheetOutOfBounds(usize, usize),

    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    #[error("A sheet named {0} already exists")]
    DuplicateSheetName(String),

    #[error("Unknown cell style: {0}")]
    UnknownStyle(String),

    #[error("Range {0} overlaps a merged range")]
    MergedCellConflict(String),

    /// Every handle slot is taken; carries the live count
    #[error("Handle table exhausted ({0} handles live)")]
    HandleExhausted(usize),

    /// Never issued, already released, or revoked by the host
    #[error("Stale handle: {0}")]
    StaleHandle(u64),
}
