use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    InvalidView(#[from] MandelbrotError),
    #[error(
        "click at ({}, {}) is outside the {}x{} frame",
        point.x, point.y, pixel_rect.width(), pixel_rect.height()
    )]
    ClickOutsideFrame { point: Point, pixel_rect: PixelRect },
}
