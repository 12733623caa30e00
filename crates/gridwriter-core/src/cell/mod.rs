//! Addressing and cell contents
//!
//! Worksheets store [`CellData`] keyed by 0-based position. [`CellAddress`]
//! and [`CellRange`] convert between that and A1 notation.

mod address;
mod range;
mod value;

pub use address::CellAddress;
pub use range::CellRange;
pub use value::CellValue;

/// A stored cell: its value and the index of its style in the sheet's pool
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellData {
    pub value: CellValue,
    pub style_index: u32,
}

impl CellData {
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// No value and the default style: nothing worth storing
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}
