use crate::core::data::colour::Colour;

/// Sub-pixel position on a drawing surface, y pointing down.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface a tree is grown onto.
pub trait TreeCanvas {
    fn draw_line(&mut self, from: CanvasPoint, to: CanvasPoint, width: f64, colour: Colour);
    fn fill_circle(&mut self, centre: CanvasPoint, radius: f64, colour: Colour);
}
