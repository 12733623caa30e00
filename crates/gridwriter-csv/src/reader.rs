//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use gridwriter_core::{CellValue, Worksheet, MAX_COLS, MAX_ROWS};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a worksheet with the given name
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Worksheet> {
        let file = File::open(path)?;
        Self::read(file, sheet_name, options)
    }

    /// Read CSV from a reader into a worksheet with the given name
    ///
    /// Empty fields leave their cell empty.
    pub fn read<R: Read>(
        reader: R,
        sheet_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(sheet_name);

        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;

            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                if row >= MAX_ROWS as usize || col >= MAX_COLS as usize {
                    return Err(CsvError::TooLarge { row, column: col });
                }

                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else {
                    CellValue::string(field)
                };
                worksheet.set_cell_value_at(row as u32, col as u16, value)?;
            }
        }

        Ok(worksheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        match trimmed.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::string(field)
    }
}
