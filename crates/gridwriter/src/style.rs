//! Writer styles
//!
//! A [`WriterStyle`] paints a region of the active sheet. Tables take three
//! of them through a [`TableStyle`] (title, header, body); single text cells
//! take the session's cell style.

use std::fmt;
use std::rc::Rc;

use gridwriter_core::{
    CellRange, Color, FillStyle, HorizontalAlignment as NativeHorizontal, NamedStyles, Underline,
    VerticalAlignment as NativeVertical, Worksheet,
};

/// The region a style is applied to
pub struct StyleTarget<'a> {
    pub sheet: &'a mut Worksheet,
    pub styles: &'a NamedStyles,
    pub range: CellRange,
}

/// Visual treatment of a sheet region
pub trait WriterStyle: fmt::Debug {
    fn apply(&self, target: &mut StyleTarget<'_>) -> gridwriter_core::Result<()>;
}

/// Apply `style` to `range` of `sheet`
pub(crate) fn paint(
    style: &dyn WriterStyle,
    sheet: &mut Worksheet,
    styles: &NamedStyles,
    range: CellRange,
) -> gridwriter_core::Result<()> {
    style.apply(&mut StyleTarget {
        sheet,
        styles,
        range,
    })
}

/// Leaves the region untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStyle;

/// Shared no-op style, the default everywhere a style is optional
pub const NO_STYLE: NoStyle = NoStyle;

impl WriterStyle for NoStyle {
    fn apply(&self, _target: &mut StyleTarget<'_>) -> gridwriter_core::Result<()> {
        Ok(())
    }
}

/// Horizontal text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Text left, numbers right
    #[default]
    Variable,
    Left,
    Middle,
    Right,
    /// Centered across the selected cells
    SpacedIn,
    /// Spread evenly across the cell
    SpacedOut,
}

impl From<HorizontalAlign> for NativeHorizontal {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Variable => NativeHorizontal::General,
            HorizontalAlign::Left => NativeHorizontal::Left,
            HorizontalAlign::Middle => NativeHorizontal::Center,
            HorizontalAlign::Right => NativeHorizontal::Right,
            HorizontalAlign::SpacedIn => NativeHorizontal::CenterContinuous,
            HorizontalAlign::SpacedOut => NativeHorizontal::Distributed,
        }
    }
}

/// Vertical text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Bottom,
    Center,
    SpacedIn,
    SpacedOut,
}

impl From<VerticalAlign> for NativeVertical {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => NativeVertical::Top,
            VerticalAlign::Bottom => NativeVertical::Bottom,
            VerticalAlign::Center => NativeVertical::Center,
            VerticalAlign::SpacedIn => NativeVertical::Distributed,
            VerticalAlign::SpacedOut => NativeVertical::Justify,
        }
    }
}

/// Declarative font, fill, alignment and dimension settings
///
/// Every property is optional on its own: `None`, an empty font name, a zero
/// font size, a transparent fill and zero dimensions leave the cell's current
/// setting alone. [`BasicStyle::new`] starts with nothing set, so only what
/// the builder calls set is written. [`Default`] is the report look: Arial
/// 12pt black, general/bottom alignment, no emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStyle {
    pub font_name: String,
    /// Points
    pub font_size: f64,
    pub font_color: Option<Color>,
    pub fill_color: Color,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    /// Characters
    pub column_width: f64,
    /// Points
    pub row_height: f64,
    pub horizontal: Option<HorizontalAlign>,
    pub vertical: Option<VerticalAlign>,
}

impl Default for BasicStyle {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 12.0,
            font_color: Some(Color::BLACK),
            bold: Some(false),
            italic: Some(false),
            underline: Some(false),
            strikethrough: Some(false),
            horizontal: Some(HorizontalAlign::Variable),
            vertical: Some(VerticalAlign::Bottom),
            ..Self::new()
        }
    }
}

impl BasicStyle {
    /// A style that overrides nothing until told to
    pub fn new() -> Self {
        Self {
            font_name: String::new(),
            font_size: 0.0,
            font_color: None,
            fill_color: Color::TRANSPARENT,
            bold: None,
            italic: None,
            underline: None,
            strikethrough: None,
            column_width: 0.0,
            row_height: 0.0,
            horizontal: None,
            vertical: None,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Font family and size in points; `""` or `0.0` keeps the current one
    pub fn font(mut self, name: impl Into<String>, size: f64) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal = Some(horizontal);
        self.vertical = Some(vertical);
        self
    }

    /// Column width in characters and row height in points; zero keeps it
    pub fn dimensions(mut self, column_width: f64, row_height: f64) -> Self {
        self.column_width = column_width;
        self.row_height = row_height;
        self
    }
}

impl WriterStyle for BasicStyle {
    fn apply(&self, target: &mut StyleTarget<'_>) -> gridwriter_core::Result<()> {
        let range = target.range;

        target.sheet.update_range_style(&range, |style| {
            if !self.font_name.is_empty() {
                style.font.name = self.font_name.clone();
            }
            if self.font_size > 0.0 {
                style.font.size = self.font_size;
            }
            if let Some(color) = self.font_color {
                style.font.color = color;
            }
            if !self.fill_color.is_transparent() {
                style.fill = FillStyle::solid(self.fill_color);
            }
            if let Some(bold) = self.bold {
                style.font.bold = bold;
            }
            if let Some(italic) = self.italic {
                style.font.italic = italic;
            }
            if let Some(underline) = self.underline {
                style.font.underline = if underline {
                    Underline::Single
                } else {
                    Underline::None
                };
            }
            if let Some(strikethrough) = self.strikethrough {
                style.font.strikethrough = strikethrough;
            }
            if let Some(horizontal) = self.horizontal {
                style.alignment.horizontal = horizontal.into();
            }
            if let Some(vertical) = self.vertical {
                style.alignment.vertical = vertical.into();
            }
        })?;

        if self.column_width > 0.0 {
            for col in range.start.col..=range.end.col {
                target.sheet.set_column_width(col, self.column_width);
            }
        }
        if self.row_height > 0.0 {
            for row in range.start.row..=range.end.row {
                target.sheet.set_row_height(row, self.row_height);
            }
        }
        Ok(())
    }
}

/// A named style of the document ("Good", "Heading 1", ...)
///
/// The name is not checked until the style is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStyle {
    name: String,
}

impl PresetStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl WriterStyle for PresetStyle {
    fn apply(&self, target: &mut StyleTarget<'_>) -> gridwriter_core::Result<()> {
        let style = target.styles.get(&self.name)?.clone();
        target.sheet.set_range_style(&target.range, &style)
    }
}

/// Fills consecutive rows with a repeating color sequence
///
/// Row `i` of the region gets `palette[i % palette.len()]`. An empty palette
/// paints nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripedStyle {
    palette: Vec<Color>,
}

impl StripedStyle {
    pub fn new(palette: impl Into<Vec<Color>>) -> Self {
        Self {
            palette: palette.into(),
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl WriterStyle for StripedStyle {
    fn apply(&self, target: &mut StyleTarget<'_>) -> gridwriter_core::Result<()> {
        if self.palette.is_empty() {
            return Ok(());
        }

        for offset in 0..target.range.row_count() {
            let Some(row) = target.range.row_at(offset) else {
                break;
            };
            let color = self.palette[offset as usize % self.palette.len()];
            target
                .sheet
                .update_range_style(&row, |style| style.fill = FillStyle::solid(color))?;
        }
        Ok(())
    }
}

/// Styles for the three parts of a table
#[derive(Debug, Clone)]
pub struct TableStyle {
    pub title: Rc<dyn WriterStyle>,
    pub header: Rc<dyn WriterStyle>,
    pub body: Rc<dyn WriterStyle>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, style: impl WriterStyle + 'static) -> Self {
        self.title = Rc::new(style);
        self
    }

    pub fn with_header(mut self, style: impl WriterStyle + 'static) -> Self {
        self.header = Rc::new(style);
        self
    }

    pub fn with_body(mut self, style: impl WriterStyle + 'static) -> Self {
        self.body = Rc::new(style);
        self
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            title: Rc::new(NO_STYLE),
            header: Rc::new(NO_STYLE),
            body: Rc::new(NO_STYLE),
        }
    }
}
