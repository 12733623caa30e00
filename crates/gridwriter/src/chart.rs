//! Chart embedding

use std::rc::Rc;

use gridwriter_chart::{Chart, ChartAnchor, ChartType, DataReference, DataSeries};
use gridwriter_core::{CellRange, HandleKind, POINTS_PER_PIXEL};

use crate::error::{ExportError, Result};
use crate::region::{HandleGuard, Region};
use crate::session::{active_sheet, SheetWriter};

/// Labelled values plotted as one chart series
///
/// Categories and values pair up by position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    categories: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(categories: Vec<String>, values: Vec<f64>) -> Self {
        Self { categories, values }
    }

    /// Build a series from `(label, value)` pairs, keeping their order
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let (categories, values) = pairs.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Self { categories, values }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SheetWriter {
    /// Embed a chart of the session's default type below and right of the written area
    ///
    /// See [`append_chart_with_type`](Self::append_chart_with_type).
    pub fn append_chart(
        &mut self,
        series: &ChartSeries,
        width_px: u32,
        height_px: u32,
        name: &str,
    ) -> Result<&mut Self> {
        let chart_type = self.options.chart_type;
        self.append_chart_with_type(chart_type, series, width_px, height_px, name)
    }

    /// Embed a chart of `width_px` x `height_px` pixels
    ///
    /// The chart's top-left corner is offset from the sheet origin by the
    /// size of the range A1 to the cursor cell, so it hangs from the top of
    /// the next row. The cursor then moves to the first row starting at or
    /// below the chart's bottom edge; it always moves at least one row.
    pub fn append_chart_with_type(
        &mut self,
        chart_type: ChartType,
        series: &ChartSeries,
        width_px: u32,
        height_px: u32,
        name: &str,
    ) -> Result<&mut Self> {
        self.ensure_open()?;
        if series.categories.len() != series.values.len() {
            return Err(ExportError::SeriesLengthMismatch {
                categories: series.categories.len(),
                values: series.values.len(),
            });
        }

        let handles = Rc::clone(self.workbook.handles());
        let row = self.cursor.row();
        let column = self.cursor.column();
        let (sheet, _) = active_sheet(&mut self.workbook)?;

        let (left, top) = {
            let extent = Region::acquire(&handles, CellRange::from_positions(1, 1, row, column)?)?;
            let range = extent.range();
            (sheet.range_width_points(&range), sheet.range_height_points(&range))
        };

        {
            let object = HandleGuard::acquire(&handles, HandleKind::ChartObject)?;
            let mut data = DataSeries::new(DataReference::numbers(series.values.clone()))
                .with_categories(DataReference::strings(series.categories.clone()));
            if !name.is_empty() {
                data = data.with_name(name);
            }

            let mut chart = Chart::new(chart_type)
                .with_anchor(ChartAnchor::new(left, top, width_px, height_px));
            chart.add_series(data);
            sheet.add_chart(chart);

            tracing::debug!(
                "Embedded chart object {} at ({left}, {top}) points, {width_px}x{height_px} px",
                object.handle()
            );
        }

        // The chart starts at the top of the row below the cursor; walk down
        // until the rows it covers are at least as tall as the chart.
        let needed = f64::from(height_px) * POINTS_PER_PIXEL;
        let mut next = row.saturating_add(1);
        while needed > 0.0 {
            let covered = Region::acquire(
                &handles,
                CellRange::from_positions(row + 1, column, next, column)?,
            )?;
            next = next.saturating_add(1);
            if sheet.range_height_points(&covered.range()) >= needed {
                break;
            }
        }
        self.cursor.set_row(next);

        Ok(self)
    }
}
