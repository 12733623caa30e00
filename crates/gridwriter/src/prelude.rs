//! Prelude module - common imports for gridwriter users
//!
//! ```rust
//! use gridwriter::prelude::*;
//! ```

pub use crate::record;

pub use crate::{
    // Styles
    BasicStyle,
    // Charts
    ChartSeries,
    ChartType,

    Color,
    // Schemas
    ColumnSchema,
    // Persistence
    CsvStore,
    DataWriter,
    DocumentStore,

    // Errors
    ExportError,
    ExportOptions,
    FieldDisplay,
    HorizontalAlign,
    PresetStyle,
    Record,
    // Session
    SheetWriter,
    StripedStyle,
    TableStyle,
    VerticalAlign,
    WriterStyle,
};
