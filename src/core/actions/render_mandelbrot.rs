//! Full-frame Mandelbrot rendering: view validation, per-pixel escape times,
//! colour mapping into an RGBA buffer.

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::view_state::ViewState;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid image size: {0}")]
    InvalidDimension(#[from] PixelRectError),
    #[error("invalid view: {0}")]
    InvalidView(#[from] MandelbrotError),
    #[error(transparent)]
    Coordinates(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Coordinates(e),
        }
    }
}

impl From<GeneratePixelBufferCancelableError> for RenderError {
    fn from(err: GeneratePixelBufferCancelableError) -> Self {
        match err {
            GeneratePixelBufferCancelableError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferCancelableError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Renders a `width` x `height` frame of `view`.
///
/// Sizes and view are validated before any pixel is computed.
pub fn render(width: u32, height: u32, view: &ViewState) -> Result<PixelBuffer, RenderError> {
    let pixel_rect = PixelRect::new(width, height)?;

    render_mandelbrot(pixel_rect, view)
}

pub fn render_mandelbrot(
    pixel_rect: PixelRect,
    view: &ViewState,
) -> Result<PixelBuffer, RenderError> {
    let (algorithm, colour_map) = prepare(pixel_rect, view)?;
    let escape_times = generate_fractal(pixel_rect, &algorithm)?;

    Ok(generate_pixel_buffer(escape_times, &colour_map, pixel_rect)?)
}

/// Same output as [`render_mandelbrot`], with rows spread over the rayon pool.
pub fn render_mandelbrot_parallel(
    pixel_rect: PixelRect,
    view: &ViewState,
) -> Result<PixelBuffer, RenderError> {
    let (algorithm, colour_map) = prepare(pixel_rect, view)?;
    let escape_times = generate_fractal_parallel_rayon(pixel_rect, &algorithm)?;

    Ok(generate_pixel_buffer(escape_times, &colour_map, pixel_rect)?)
}

/// Parallel render that gives up with [`RenderError::Cancelled`] once
/// `cancel` fires. A cancelled render never yields a partial buffer.
pub fn render_mandelbrot_cancelable<C: CancelToken>(
    pixel_rect: PixelRect,
    view: &ViewState,
    cancel: &C,
) -> Result<PixelBuffer, RenderError> {
    let (algorithm, colour_map) = prepare(pixel_rect, view)?;
    let escape_times = generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, cancel)?;

    cancel.check()?;

    Ok(generate_pixel_buffer_cancelable(
        escape_times,
        &colour_map,
        pixel_rect,
        cancel,
    )?)
}

fn prepare(
    pixel_rect: PixelRect,
    view: &ViewState,
) -> Result<(MandelbrotAlgorithm, Box<dyn MandelbrotColourMap>), RenderError> {
    view.validate()?;

    debug!(
        "rendering {}x{} around {} at zoom {}, {} iterations, {} colours",
        pixel_rect.width(),
        pixel_rect.height(),
        view.center(),
        view.zoom(),
        view.max_iterations(),
        view.colour_scheme()
    );

    let algorithm = MandelbrotAlgorithm::new(pixel_rect, view.viewport(), view.max_iterations())?;
    let colour_map = mandelbrot_colour_map_factory(view.colour_scheme(), view.max_iterations());

    Ok((algorithm, colour_map))
}
