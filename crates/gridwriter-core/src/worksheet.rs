//! Sheets: cells, pooled styles, dimensions, merges, filter and charts

use std::collections::BTreeMap;

use gridwriter_chart::Chart;

use crate::cell::{CellAddress, CellData, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::style::{Style, StylePool};
use crate::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT, MAX_COLS, MAX_ROWS, POINTS_PER_PIXEL};

/// Column auto-fit settings, widths in characters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutofitOptions {
    /// Narrowest width a fitted column may get
    pub min_width: f64,
    /// Widest width a fitted column may get
    pub max_width: f64,
    /// Extra characters added to the widest content
    pub padding: f64,
}

impl Default for AutofitOptions {
    fn default() -> Self {
        Self {
            min_width: 8.0,
            max_width: 60.0,
            padding: 2.0,
        }
    }
}

/// One sheet of a [`Workbook`](crate::Workbook)
///
/// Only cells with a value or a non-default style are stored.
#[derive(Debug)]
pub struct Worksheet {
    name: String,
    // keyed (row, col) so iteration is row-major
    cells: BTreeMap<(u32, u16), CellData>,
    style_pool: StylePool,
    // points
    row_heights: BTreeMap<u32, f64>,
    // characters
    column_widths: BTreeMap<u16, f64>,
    merged_regions: Vec<CellRange>,
    autofilter: Option<CellRange>,
    charts: Vec<Chart>,
}

impl Worksheet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            style_pool: StylePool::new(),
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            merged_regions: Vec::new(),
            autofilter: None,
            charts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // the workbook validates
    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(&(row, col))
    }

    /// Value at an A1 address; unset cells read as [`CellValue::Empty`]
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// The cell's style unless it is the default one
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        match self.cell_at(row, col)?.style_index {
            0 => None,
            idx => self.style_pool.get(idx),
        }
    }

    pub fn cell_style(&self, address: &str) -> Result<Option<&Style>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_at(addr.row, addr.col))
    }

    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value.into();
        if cell.is_blank() {
            self.cells.remove(&(row, col));
        }
        Ok(())
    }

    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let style_index = self.style_pool.get_or_insert(style.clone());
        self.put_style_index(row, col, style_index);
        Ok(())
    }

    /// Replace the style of every cell in `range`
    pub fn set_range_style(&mut self, range: &CellRange, style: &Style) -> Result<()> {
        self.validate_range(range)?;
        let style_index = self.style_pool.get_or_insert(style.clone());
        for addr in range.cells() {
            self.put_style_index(addr.row, addr.col, style_index);
        }
        Ok(())
    }

    /// Edit each cell's current style in place
    ///
    /// `update` runs once per distinct style found in the range, so cells
    /// that shared a style still share one afterwards.
    pub fn update_range_style<F>(&mut self, range: &CellRange, mut update: F) -> Result<()>
    where
        F: FnMut(&mut Style),
    {
        self.validate_range(range)?;
        let mut remapped: BTreeMap<u32, u32> = BTreeMap::new();

        for addr in range.cells() {
            let current = self
                .cell_at(addr.row, addr.col)
                .map(|c| c.style_index)
                .unwrap_or(0);

            let new_index = match remapped.get(&current) {
                Some(&idx) => idx,
                None => {
                    let mut style = self
                        .style_pool
                        .get(current)
                        .cloned()
                        .unwrap_or_default();
                    update(&mut style);
                    let idx = self.style_pool.get_or_insert(style);
                    remapped.insert(current, idx);
                    idx
                }
            };
            self.put_style_index(addr.row, addr.col, new_index);
        }
        Ok(())
    }

    fn put_style_index(&mut self, row: u32, col: u16, style_index: u32) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.style_index = style_index;
        if cell.is_blank() {
            self.cells.remove(&(row, col));
        }
    }

    /// Last row holding a value; styled-only cells do not count
    pub fn last_used_row(&self) -> Option<u32> {
        self.cells
            .iter()
            .rev()
            .find(|(_, c)| !c.value.is_empty())
            .map(|(&(row, _), _)| row)
    }

    /// Rightmost column holding a value in any row
    pub fn last_used_column(&self) -> Option<u16> {
        self.cells
            .iter()
            .filter(|(_, c)| !c.value.is_empty())
            .map(|(&(_, col), _)| col)
            .max()
    }

    /// Points
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    /// Characters of the default font
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Rows with an explicit height
    pub fn custom_row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    /// Columns with an explicit width
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    /// Rendered width of a column in points
    ///
    /// A width of `w` characters renders as `trunc(w * 7 + 5)` pixels with the
    /// default font.
    pub fn column_width_points(&self, col: u16) -> f64 {
        (self.column_width(col) * 7.0 + 5.0).trunc() * POINTS_PER_PIXEL
    }

    /// Total height of rows `from..=to` in points
    pub fn rows_height_points(&self, from: u32, to: u32) -> f64 {
        let (from, to) = (from.min(to), from.max(to));
        let custom: f64 = self.row_heights.range(from..=to).map(|(_, h)| *h).sum();
        let default_rows = (to - from + 1) as usize - self.row_heights.range(from..=to).count();
        custom + default_rows as f64 * DEFAULT_ROW_HEIGHT
    }

    /// Width of a range in points
    pub fn range_width_points(&self, range: &CellRange) -> f64 {
        (range.start.col..=range.end.col)
            .map(|col| self.column_width_points(col))
            .sum()
    }

    /// Height of a range in points
    pub fn range_height_points(&self, range: &CellRange) -> f64 {
        self.rows_height_points(range.start.row, range.end.row)
    }

    /// Size every column of `range` to fit the text it holds within the range
    ///
    /// Cells inside merged regions do not count. Columns with no text keep
    /// their width.
    pub fn autofit_columns(&mut self, range: &CellRange, options: &AutofitOptions) -> Result<()> {
        self.validate_range(range)?;
        for col in range.start.col..=range.end.col {
            let widest = (range.start.row..=range.end.row)
                .filter(|&row| !self.is_merged(&CellAddress::new(row, col)))
                .filter_map(|row| self.cell_at(row, col))
                .map(|cell| estimate_text_width(&cell.value.to_string()))
                .max();

            if let Some(widest) = widest {
                let width = (widest as f64 + options.padding)
                    .clamp(options.min_width, options.max_width);
                self.set_column_width(col, width);
            }
        }
        Ok(())
    }

    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge `range`; it may not overlap an existing merge
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        self.validate_range(range)?;
        if self.merged_regions.iter().any(|existing| range.overlaps(existing)) {
            return Err(Error::MergedCellConflict(range.to_string()));
        }
        self.merged_regions.push(*range);
        Ok(())
    }

    pub fn is_merged(&self, addr: &CellAddress) -> bool {
        self.merged_regions.iter().any(|r| r.contains(addr))
    }

    pub fn autofilter(&self) -> Option<&CellRange> {
        self.autofilter.as_ref()
    }

    /// A sheet has one filter range; setting it replaces the old one
    pub fn set_autofilter(&mut self, range: &CellRange) -> Result<()> {
        self.validate_range(range)?;
        self.autofilter = Some(*range);
        Ok(())
    }

    /// Charts in the order they were added
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn add_chart(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    /// Stored cells, styled-only ones included
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored cells, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter().map(|(&(row, col), cell)| (row, col, cell))
    }

    fn validate_range(&self, range: &CellRange) -> Result<()> {
        self.validate_cell_position(range.start.row, range.start.col)?;
        self.validate_cell_position(range.end.row, range.end.col)
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        Ok(())
    }
}

/// Display width of text in characters; non-ASCII glyphs count as 1.6
fn estimate_text_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|c| c.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}
