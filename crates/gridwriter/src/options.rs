//! Session options

use gridwriter_chart::ChartType;
use gridwriter_core::AutofitOptions;

/// Options for a [`SheetWriter`](crate::SheetWriter) session
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExportOptions {
    /// Column auto-fit bounds applied after each table
    pub autofit: AutofitOptions,
    /// Most handles the document may have live at once (`None` = unbounded)
    pub handle_capacity: Option<usize>,
    /// Chart type used by `append_chart`
    pub chart_type: ChartType,
}
