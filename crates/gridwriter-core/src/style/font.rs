use super::Color;

/// Typeface settings of a cell
///
/// Sizes are points. The default mirrors a fresh document: 11pt Calibri in
/// the automatic color.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: String::from("Calibri"),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::Auto,
        }
    }
}

// f64 has no Eq/Hash; sizes are compared bitwise so pooled styles stay stable.
impl Eq for FontStyle {}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let FontStyle {
            name,
            size,
            bold,
            italic,
            underline,
            strikethrough,
            color,
        } = self;
        name.hash(state);
        size.to_bits().hash(state);
        (bold, italic, strikethrough).hash(state);
        underline.hash(state);
        color.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
}
