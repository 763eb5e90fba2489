use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::view_state::ViewState;

/// A finished frame together with the view it shows.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub view: ViewState,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
