use crate::anchor::ChartAnchor;
use crate::series::DataSeries;

/// Kinds of chart a writer can embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartType {
    #[default]
    ColumnClustered,
    BarClustered,
    Line,
    LineMarkers,
    Pie,
    Area,
    ScatterMarkers,
}

/// A chart object on a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub chart_type: ChartType,
    pub series: Vec<DataSeries>,
    pub anchor: ChartAnchor,
}

impl Chart {
    /// An empty chart at the sheet origin
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            series: Vec::new(),
            anchor: ChartAnchor::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: ChartAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// Points in the longest series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }
}
