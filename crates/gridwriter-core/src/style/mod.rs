//! Cell styles
//!
//! A [`Style`] bundles what a writer can set on a cell: font, background and
//! alignment. Sheets keep each distinct style once in a [`StylePool`].

mod alignment;
mod color;
mod fill;
mod font;
mod pool;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use color::Color;
pub use fill::FillStyle;
pub use font::{FontStyle, Underline};
pub use pool::StylePool;

/// Formatting of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub font: FontStyle,
    pub fill: FillStyle,
    pub alignment: Alignment,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.font.bold = on;
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.font.italic = on;
        self
    }

    /// Font size in points
    pub fn font_size(mut self, points: f64) -> Self {
        self.font.size = points;
        self
    }

    pub fn font_name(mut self, family: impl Into<String>) -> Self {
        self.font.name = family.into();
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Solid background; a transparent color clears the fill
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    pub fn align(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.alignment = Alignment {
            horizontal,
            vertical,
        };
        self
    }
}
