use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} pixel rect",
        point.x, point.y, pixel_rect.width(), pixel_rect.height()
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps a fractional image position to the complex plane.
///
/// `(0, 0)` is the top-left corner of `complex_rect`; `(1, 1)` would be the
/// bottom-right corner, which no pixel ever reaches.
#[must_use]
pub fn fraction_to_complex_coords(x_frac: f64, y_frac: f64, complex_rect: ComplexRect) -> Complex {
    let top_left = complex_rect.top_left();

    Complex {
        real: top_left.real + x_frac * complex_rect.width(),
        imag: top_left.imag + y_frac * complex_rect.height(),
    }
}

/// Inverse of [`fraction_to_complex_coords`].
#[must_use]
pub fn complex_to_fraction_coords(point: Complex, complex_rect: ComplexRect) -> (f64, f64) {
    let top_left = complex_rect.top_left();

    (
        (point.real - top_left.real) / complex_rect.width(),
        (point.imag - top_left.imag) / complex_rect.height(),
    )
}

#[must_use]
pub fn pixel_to_fraction(pixel_position: Point, pixel_rect: PixelRect) -> (f64, f64) {
    (
        f64::from(pixel_position.x) / f64::from(pixel_rect.width()),
        f64::from(pixel_position.y) / f64::from(pixel_rect.height()),
    )
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let (x_frac, y_frac) = pixel_to_fraction(pixel_position, pixel_rect);

    Ok(fraction_to_complex_coords(x_frac, y_frac, complex_rect))
}
