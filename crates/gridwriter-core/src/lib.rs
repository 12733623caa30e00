//! # gridwriter-core
//!
//! The host document driven by the gridwriter export engine.
//!
//! An in-memory spreadsheet: a [`Workbook`] of [`Worksheet`]s holding cell
//! values, pooled [`Style`]s, merges, a filter range and charts. Named styles
//! ("Good", "Heading 1", ...) live in [`NamedStyles`]; every part a client
//! holds on to is tracked in the document's [`HandleTable`].
//!
//! ```rust
//! use gridwriter_core::{CellRange, Workbook};
//!
//! let mut doc = Workbook::new();
//! let sheet = doc.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Quarterly report").unwrap();
//! sheet.set_cell_value_at(1, 0, 42.0).unwrap();
//! sheet.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();
//! assert_eq!(sheet.last_used_row(), Some(1));
//! ```

pub mod cell;
pub mod error;
pub mod handle;
pub mod named_style;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use handle::{Handle, HandleKind, HandleTable};
pub use named_style::NamedStyles;
pub use workbook::{validate_sheet_name, Workbook};
pub use worksheet::{AutofitOptions, Worksheet};

pub use style::{
    Alignment, Color, FillStyle, FontStyle, HorizontalAlignment, Style, StylePool, Underline,
    VerticalAlignment,
};

/// Rows a sheet can address
pub const MAX_ROWS: u32 = 1_048_576;

/// Columns a sheet can address (`A` to `XFD`)
pub const MAX_COLS: u16 = 16_384;

pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Characters of the default font
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// At 96 DPI
pub const POINTS_PER_PIXEL: f64 = 0.75;
