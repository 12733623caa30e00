//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use gridwriter_core::Worksheet;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    ///
    /// Rows and columns from A1 to the last used cell are written; an empty
    /// sheet produces an empty file.
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::CrLf => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if let (Some(last_row), Some(last_col)) =
            (worksheet.last_used_row(), worksheet.last_used_column())
        {
            for row in 0..=last_row {
                let record: Vec<String> = (0..=last_col)
                    .map(|col| worksheet.get_value_at(row, col).to_string())
                    .collect();
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
