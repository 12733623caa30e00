use std::fmt;
use std::str::FromStr;

use super::CellAddress;
use crate::error::{Error, Result};

/// An inclusive rectangle of cells, `start` top-left and `end` bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    /// Range spanned by two opposite corners, in either order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn single(addr: CellAddress) -> Self {
        Self::new(addr, addr)
    }

    /// From 0-based corner indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// From 1-based corner positions
    pub fn from_positions(
        start_row: u32,
        start_column: u32,
        end_row: u32,
        end_column: u32,
    ) -> Result<Self> {
        let start = CellAddress::from_position(start_row, start_column)?;
        let end = CellAddress::from_position(end_row, end_column)?;
        Ok(Self::new(start, end))
    }

    /// Parse `A1:C3`, or a lone `B2` as a one-cell range
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => CellAddress::parse(text).map(Self::single),
        }
    }

    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && other.start.row <= self.end.row
            && self.start.col <= other.end.col
            && other.start.col <= self.end.col
    }

    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// The `offset`-th row of the range as its own range
    pub fn row_at(&self, offset: u32) -> Option<CellRange> {
        let row = self.start.row.checked_add(offset)?;
        (row <= self.end.row)
            .then(|| CellRange::from_indices(row, self.start.col, row, self.end.col))
    }

    /// Every address, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let CellRange { start, end } = *self;
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| CellAddress::new(row, col)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
