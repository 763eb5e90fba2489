use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render_mandelbrot::{
    RenderError, render_mandelbrot, render_mandelbrot_parallel,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::view_state::ViewState;

/// One-shot render of a view to a file.
pub struct MandelbrotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> MandelbrotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        pixel_rect: PixelRect,
        view: &ViewState,
        parallel: bool,
    ) -> Result<Duration, RenderError> {
        info!(
            "rendering {}x{} Mandelbrot frame, {} iterations, {} colours",
            pixel_rect.width(),
            pixel_rect.height(),
            view.max_iterations(),
            view.colour_scheme()
        );

        let start = Instant::now();
        let buffer = if parallel {
            render_mandelbrot_parallel(pixel_rect, view)?
        } else {
            render_mandelbrot(pixel_rect, view)?
        };
        let duration = start.elapsed();

        info!("rendered in {duration:?}");
        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Fails with [`PresentError::NothingRendered`] before the first
    /// successful [`generate`](Self::generate).
    pub fn write(&self, filepath: &Path) -> Result<(), PresentError> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| PresentError::NothingRendered {
                path: filepath.to_path_buf(),
            })?;

        self.presenter.present(buffer, filepath)?;
        info!("saved to {}", filepath.display());

        Ok(())
    }
}
