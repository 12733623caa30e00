use super::Color;

/// Background of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    #[default]
    None,
    Solid { color: Color },
}

impl FillStyle {
    /// Solid fill in `color`; transparent colors give [`FillStyle::None`]
    pub fn solid(color: Color) -> Self {
        if color.is_transparent() {
            return FillStyle::None;
        }
        FillStyle::Solid { color }
    }

    pub fn is_none(&self) -> bool {
        *self == FillStyle::None
    }

    pub fn color(&self) -> Option<Color> {
        match *self {
            FillStyle::Solid { color } => Some(color),
            FillStyle::None => None,
        }
    }
}
