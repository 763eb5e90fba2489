use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::view_state::ViewState;

/// Snapshot of everything one interactive render needs.
///
/// `PartialEq` lets callers skip submitting a request identical to the last.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub pixel_rect: PixelRect,
    pub view: ViewState,
}
