/// Placement of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Left for text, right for numbers
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Centered over the selected run of cells
    CenterContinuous,
    /// Spread evenly with inner padding
    Distributed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    /// Lines spread to the full cell height
    Justify,
    /// Lines spread with padding above and below
    Distributed,
}
