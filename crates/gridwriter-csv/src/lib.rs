//! # gridwriter-csv
//!
//! CSV reader and writer for gridwriter worksheets.
//!
//! The writer keeps the sheet's origin: leading empty rows and columns are
//! written as empty fields, so a table placed at C5 is read back at C5.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
