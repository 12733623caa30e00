//! Table layout
//!
//! A table is laid out from the cursor: an optional merged title row, a
//! header row carrying the auto-filter, then one body row per record. Body
//! cells are written a column at a time. Every region the layout touches is
//! held through a scoped handle, so the document has the same number of live
//! handles before and after an append whether it succeeds or not.

use std::rc::Rc;

use gridwriter_core::{CellRange, HandleKind};

use crate::error::{ExportError, Result};
use crate::region::{HandleGuard, Region};
use crate::schema::{ColumnSchema, Record};
use crate::session::{active_sheet, SheetWriter};
use crate::style::paint;

impl SheetWriter {
    /// Write `records` as a table at the cursor
    ///
    /// An empty `title` skips the title row. When the record type has no
    /// included column nothing is written and the cursor does not move.
    /// Afterwards the cursor sits on the last body row, back in the table's
    /// first column.
    pub fn append_table<T: Record>(&mut self, records: &[T], title: &str) -> Result<&mut Self> {
        self.ensure_open()?;
        if records.is_empty() {
            return Err(ExportError::EmptyInput);
        }

        let schema = ColumnSchema::<T>::derive();
        if schema.is_empty() {
            tracing::debug!("Skipping table {title:?}: no included columns");
            return Ok(self);
        }

        let handles = Rc::clone(self.workbook.handles());
        let style = self.table_style.clone();
        let formatter = Rc::clone(&self.formatter);
        let autofit = self.options.autofit;

        let width = u32::try_from(schema.len()).unwrap_or(u32::MAX);
        let record_count = u32::try_from(records.len()).unwrap_or(u32::MAX);
        let start_row = self.cursor.row();
        let start_col = self.cursor.column();
        let end_col = start_col.saturating_add(width - 1);

        let _table = HandleGuard::acquire(&handles, HandleKind::Range)?;
        let (sheet, styles) = active_sheet(&mut self.workbook)?;
        let mut row = start_row;

        if !title.is_empty() {
            let region = Region::acquire(
                &handles,
                CellRange::from_positions(row, start_col, row, end_col)?,
            )?;
            let range = region.range();
            sheet.merge_cells(&range)?;
            paint(style.title.as_ref(), sheet, styles, range)?;
            sheet.set_cell_value_at(range.start.row, range.start.col, title)?;
            row = row.saturating_add(1);
        }

        {
            let region = Region::acquire(
                &handles,
                CellRange::from_positions(row, start_col, row, end_col)?,
            )?;
            let range = region.range();
            for (offset, column) in schema.columns().enumerate() {
                let col = range.start.col + offset as u16;
                sheet.set_cell_value_at(range.start.row, col, column.display_name())?;
            }
            paint(style.header.as_ref(), sheet, styles, range)?;
            sheet.set_autofilter(&range)?;
            row = row.saturating_add(1);
        }

        let body_start = row;
        let body_end = body_start.saturating_add(record_count - 1);

        for (offset, column) in schema.columns().enumerate() {
            let col = start_col + offset as u32;
            let region = Region::acquire(
                &handles,
                CellRange::from_positions(body_start, col, body_end, col)?,
            )?;
            let range = region.range();
            for (index, record) in records.iter().enumerate() {
                let text = formatter.format(column.value(record), column.format());
                sheet.set_cell_value_at(range.start.row + index as u32, range.start.col, text)?;
            }
        }

        self.cursor.set_row(body_end);

        {
            let region = Region::acquire(
                &handles,
                CellRange::from_positions(body_start, start_col, body_end, end_col)?,
            )?;
            paint(style.body.as_ref(), sheet, styles, region.range())?;
        }

        {
            let region = Region::acquire(
                &handles,
                CellRange::from_positions(start_row, start_col, body_end, end_col)?,
            )?;
            sheet.autofit_columns(&region.range(), &autofit)?;
        }

        self.cursor.set_column(start_col);

        tracing::debug!(
            "Appended table {title:?}: {} columns x {} rows at row {start_row}, column {start_col}",
            width,
            record_count
        );
        Ok(self)
    }
}
