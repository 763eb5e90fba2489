pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::interactive::{
    ExplorerEvent, ExplorerState, FrameData, FrameSink, InteractiveController, RenderEvent,
    RenderFailure, RenderRequest,
};
pub use crate::controllers::mandelbrot::MandelbrotController;
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::controllers::tree::TreeController;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, GenerationToken, NeverCancel};
pub use crate::core::actions::rasterize_tree::{PixelCanvas, render_tree};
pub use crate::core::actions::render_mandelbrot::{
    RenderError, render, render_mandelbrot, render_mandelbrot_cancelable,
    render_mandelbrot_parallel,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_for;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::navigation::{reset, zoom_at, zoom_at_pixel};
pub use crate::core::fractals::mandelbrot::view_state::ViewState;
pub use crate::core::fractals::tree::canvas::{CanvasPoint, TreeCanvas};
pub use crate::core::fractals::tree::errors::TreeError;
pub use crate::core::fractals::tree::grow::{TreeStats, draw_tree};
pub use crate::core::fractals::tree::params::TreeParams;
pub use crate::input::cli::args::Cli;
pub use crate::input::cli::run;
pub use crate::presenters::file::factory::file_presenter_for_path;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
