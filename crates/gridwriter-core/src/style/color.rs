use std::fmt;

/// A font or fill color
///
/// `Argb` with alpha 0 paints nothing; fills treat it as "no fill".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Whatever the document uses by default
    #[default]
    Auto,
    Rgb { r: u8, g: u8, b: u8 },
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const TRANSPARENT: Color = Color::argb(0, 255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Argb { a: 0, .. })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Auto => f.write_str("auto"),
            Color::Rgb { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Color::Argb { a, r, g, b } => write!(f, "#{a:02X}{r:02X}{g:02X}{b:02X}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Color::RED.to_string(), "#FF0000");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00FFFFFF");
        assert_eq!(Color::Auto.to_string(), "auto");
    }

    #[test]
    fn test_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::argb(1, 0, 0, 0).is_transparent());
        assert!(!Color::WHITE.is_transparent());
    }
}
