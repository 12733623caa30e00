//! # gridwriter
//!
//! Cursor-driven export of typed records into spreadsheet documents.
//!
//! A [`SheetWriter`] keeps a cursor over the active sheet of a document.
//! Tables, charts and single text cells are written at the cursor, which then
//! moves so the next call continues where the last one stopped. Callers never
//! deal in absolute cell addresses.
//!
//! ## Features
//!
//! - Column schemas derived from record types ([`Record`], [`record!`])
//! - Tables with a merged title row, filtered header row and body
//! - Pluggable styling: declarative, named preset, striped rows
//! - Column charts and friends placed below the written area
//! - Scoped native handles released on every exit path
//!
//! ## Example
//!
//! ```rust
//! use gridwriter::prelude::*;
//!
//! struct Sale {
//!     region: String,
//!     total: f64,
//! }
//!
//! record!(Sale {
//!     region => FieldDisplay::titled("Region"),
//!     total => FieldDisplay::titled("Total"),
//! });
//!
//! let sales = vec![
//!     Sale { region: "North".into(), total: 120.5 },
//!     Sale { region: "South".into(), total: 98.0 },
//! ];
//!
//! let mut writer = SheetWriter::new()?;
//! writer
//!     .set_table_style(
//!         TableStyle::new()
//!             .with_title(PresetStyle::new("Title"))
//!             .with_header(BasicStyle::new().bold(true))
//!             .with_body(StripedStyle::new([Color::WHITE, Color::LIGHT_GRAY])),
//!     )
//!     .append_table(&sales, "Sales")?
//!     .new_row()
//!     .append_chart(
//!         &ChartSeries::from_pairs(sales.iter().map(|s| (s.region.clone(), s.total))),
//!         480,
//!         288,
//!         "Total",
//!     )?;
//!
//! // writer.write_to(Path::new("sales.csv"))?;
//! writer.dispose();
//! # Ok::<(), ExportError>(())
//! ```

mod chart;
mod cursor;
mod error;
mod format;
mod options;
mod region;
mod schema;
mod session;
mod store;
mod style;
mod table;
mod writer;

pub mod prelude;

pub use chart::ChartSeries;
pub use cursor::GridCursor;
pub use error::{ExportError, Result};
pub use format::{CellFormatter, PlainText};
pub use options::ExportOptions;
pub use schema::{ColumnSchema, Field, FieldDisplay, Record, SchemaColumn};
pub use session::SheetWriter;
pub use store::{CsvStore, DocumentStore, StoreError};
pub use style::{
    BasicStyle, HorizontalAlign, NoStyle, PresetStyle, StripedStyle, StyleTarget, TableStyle,
    VerticalAlign, WriterStyle, NO_STYLE,
};
pub use writer::DataWriter;

// Re-export document types
pub use gridwriter_core::Error as DocumentError;
pub use gridwriter_core::{
    AutofitOptions, CellAddress, CellRange, CellValue, Color, Handle, HandleKind, HandleTable,
    NamedStyles, Style, Workbook, Worksheet, MAX_COLS, MAX_ROWS,
};

// Re-export chart types
pub use gridwriter_chart::{Chart, ChartAnchor, ChartType, DataReference, DataSeries};

// Re-export I/O types
pub use gridwriter_csv::{CsvError, CsvReadOptions, CsvWriteOptions, LineTerminator};
