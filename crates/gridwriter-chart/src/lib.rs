//! # gridwriter-chart
//!
//! Charts embedded in gridwriter worksheets. A [`Chart`] carries literal
//! data series and an absolute [`ChartAnchor`]; sheets own the charts placed
//! on them.

mod anchor;
mod chart;
mod series;

pub use anchor::ChartAnchor;
pub use chart::{Chart, ChartType};
pub use series::{DataReference, DataSeries};
