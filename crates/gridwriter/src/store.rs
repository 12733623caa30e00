//! Document persistence
//!
//! The session never touches a file format directly. It loads and saves its
//! workbook through a [`DocumentStore`].

use std::fmt;
use std::path::{Path, PathBuf};

use gridwriter_core::{validate_sheet_name, Workbook};
use gridwriter_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
use thiserror::Error;

/// Errors raised while loading or saving a document
#[derive(Debug, Error)]
pub enum StoreError {
    /// CSV parsing or I/O failed
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// The loaded data does not fit the document model
    #[error("Document error: {0}")]
    Document(#[from] gridwriter_core::Error),
}

/// Loads and saves whole documents
pub trait DocumentStore: fmt::Debug {
    /// Load a document from `path`
    fn open(&self, path: &Path) -> Result<Workbook, StoreError>;

    /// Persist `workbook` to `path`
    fn save(&self, workbook: &Workbook, path: &Path) -> Result<(), StoreError>;
}

/// Stores a document as CSV
///
/// A CSV file holds a single sheet. Opening yields a one-sheet workbook named
/// after the file stem. A one-sheet workbook is saved to the path as given;
/// with more sheets, each one goes to its own `<stem>-<sheet>.<ext>` file
/// next to it and the path itself is not written.
#[derive(Debug, Clone, Default)]
pub struct CsvStore {
    pub read_options: CsvReadOptions,
    pub write_options: CsvWriteOptions,
}

impl CsvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for CsvStore {
    fn open(&self, path: &Path) -> Result<Workbook, StoreError> {
        let sheet_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| validate_sheet_name(stem).is_ok())
            .unwrap_or("Sheet1");

        let worksheet = CsvReader::read_file(path, sheet_name, &self.read_options)?;
        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;
        Ok(workbook)
    }

    fn save(&self, workbook: &Workbook, path: &Path) -> Result<(), StoreError> {
        let sheets: Vec<_> = workbook.worksheets().collect();
        match sheets[..] {
            [] => return Err(gridwriter_core::Error::SheetOutOfBounds(0, 0).into()),
            [only] => CsvWriter::write_file(only, path, &self.write_options)?,
            _ => {
                for &worksheet in &sheets {
                    let sheet_path = sheet_file(path, worksheet.name());
                    CsvWriter::write_file(worksheet, &sheet_path, &self.write_options)?;
                    tracing::debug!("Wrote sheet {} to {}", worksheet.name(), sheet_path.display());
                }
            }
        }
        Ok(())
    }
}

/// `dir/report.csv` + `Totals` -> `dir/report-Totals.csv`
fn sheet_file(path: &Path, sheet_name: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let mut name = format!("{stem}-{sheet_name}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}
