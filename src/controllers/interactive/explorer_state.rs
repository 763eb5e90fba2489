use std::sync::Arc;

use log::debug;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::explorer::ExplorerError;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::navigation::{reset, zoom_at, zoom_at_pixel};
use crate::core::fractals::mandelbrot::view_state::ViewState;

/// A user action against the explorer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ExplorerEvent {
    /// Click given as fractions of the frame size.
    ClickFraction { x: f64, y: f64 },
    ClickPixel(Point),
    Reset,
    SetIterations(u32),
    SetZoom(f64),
    SetCenter(Complex),
    SetColourScheme(ColourSchemeKind),
    Resize(PixelRect),
}

/// Current view and frame size of an interactive session, plus what was last
/// handed to the renderer.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    view: ViewState,
    pixel_rect: PixelRect,
    last_submitted_request: Option<Arc<RenderRequest>>,
    latest_submitted_generation: u64,
}

impl ExplorerState {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self::with_view(pixel_rect, ViewState::default())
    }

    #[must_use]
    pub fn with_view(pixel_rect: PixelRect, view: ViewState) -> Self {
        Self {
            view,
            pixel_rect,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn latest_submitted_generation(&self) -> u64 {
        self.latest_submitted_generation
    }

    /// Applies `event`; on error the state is left unchanged.
    pub fn apply(&mut self, event: ExplorerEvent) -> Result<(), ExplorerError> {
        let view = self.view;

        self.view = match event {
            ExplorerEvent::ClickFraction { x, y } => checked(zoom_at(view, x, y))?,
            ExplorerEvent::ClickPixel(point) => {
                if !self.pixel_rect.contains_point(point) {
                    return Err(ExplorerError::ClickOutsideFrame {
                        point,
                        pixel_rect: self.pixel_rect,
                    });
                }
                checked(zoom_at_pixel(view, self.pixel_rect, point))?
            }
            ExplorerEvent::Reset => reset(view),
            ExplorerEvent::SetIterations(max_iterations) => view.with_max_iterations(max_iterations)?,
            ExplorerEvent::SetZoom(zoom) => view.with_zoom(zoom)?,
            ExplorerEvent::SetCenter(center) => view.with_center(center)?,
            ExplorerEvent::SetColourScheme(scheme) => view.with_colour_scheme(scheme),
            ExplorerEvent::Resize(pixel_rect) => {
                self.pixel_rect = pixel_rect;
                view
            }
        };

        debug!(
            "{event:?}: center {}, zoom {}, {} iterations, {} colours",
            self.view.center(),
            self.view.zoom(),
            self.view.max_iterations(),
            self.view.colour_scheme()
        );

        Ok(())
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            pixel_rect: self.pixel_rect,
            view: self.view,
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<RenderRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }
}

// Zooming can push the center or zoom out of range.
fn checked(view: ViewState) -> Result<ViewState, MandelbrotError> {
    view.validate().map(|()| view)
}
