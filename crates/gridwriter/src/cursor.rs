//! The write cursor

use gridwriter_core::{MAX_COLS, MAX_ROWS};

/// Position of the next write, in 1-based grid coordinates
///
/// The row and column offsets move the document origin ("base"). The cursor
/// never sits above or left of the base: `row >= 1 + row_offset` and
/// `column >= 1 + column_offset` hold after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    row: u32,
    column: u32,
    row_offset: u32,
    column_offset: u32,
}

impl GridCursor {
    /// Cursor at A1 with no offsets
    pub fn new() -> Self {
        Self {
            row: 1,
            column: 1,
            row_offset: 0,
            column_offset: 0,
        }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn row_offset(&self) -> u32 {
        self.row_offset
    }

    pub fn column_offset(&self) -> u32 {
        self.column_offset
    }

    /// First row writes may use
    pub fn base_row(&self) -> u32 {
        1 + self.row_offset
    }

    /// First column writes may use
    pub fn base_column(&self) -> u32 {
        1 + self.column_offset
    }

    /// Advance `count` rows; counts below 1 advance one row
    pub fn skip_rows(&mut self, count: i32) {
        self.row = self.row.saturating_add(count.max(1) as u32);
    }

    /// Advance `count` columns; counts below 1 advance one column
    pub fn skip_columns(&mut self, count: i32) {
        self.column = self.column.saturating_add(count.max(1) as u32);
    }

    /// Move to the base column of the next row
    pub fn new_row(&mut self) {
        self.row = self.row.saturating_add(1);
        self.column = self.base_column();
    }

    pub fn reset_column(&mut self) {
        self.column = self.base_column();
    }

    pub fn reset_row(&mut self) {
        self.row = self.base_row();
    }

    /// Set the document row offset; negative values clamp to 0
    ///
    /// A cursor left above the new base is pulled down to it.
    pub fn set_row_offset(&mut self, offset: i64) {
        self.row_offset = offset.clamp(0, MAX_ROWS as i64 - 1) as u32;
        self.row = self.row.max(self.base_row());
    }

    /// Set the document column offset; negative values clamp to 0
    ///
    /// A cursor left of the new base is pulled right to it.
    pub fn set_column_offset(&mut self, offset: i64) {
        self.column_offset = offset.clamp(0, MAX_COLS as i64 - 1) as u32;
        self.column = self.column.max(self.base_column());
    }

    pub(crate) fn set_row(&mut self, row: u32) {
        self.row = row.max(self.base_row());
    }

    pub(crate) fn set_column(&mut self, column: u32) {
        self.column = column.max(self.base_column());
    }
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}
