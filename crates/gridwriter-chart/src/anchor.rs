/// Where a chart sits on its sheet
///
/// `left` and `top` are points from the top-left corner of cell A1. The size
/// stays in screen pixels, the unit callers ask for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartAnchor {
    pub left: f64,
    pub top: f64,
    pub width_px: u32,
    pub height_px: u32,
}

impl ChartAnchor {
    pub fn new(left: f64, top: f64, width_px: u32, height_px: u32) -> Self {
        Self {
            left,
            top,
            width_px,
            height_px,
        }
    }
}
