use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Orbits whose squared magnitude exceeds this have escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of iterations of `z = z² + c` before `|z|² > 4`, or
/// `max_iterations` when the orbit stays bounded.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::default();
    let mut iterations = 0;

    while iterations < max_iterations {
        let real_sq = z.real * z.real;
        let imag_sq = z.imag * z.imag;

        if real_sq + imag_sq > ESCAPE_RADIUS_SQUARED {
            return iterations;
        }

        z = Complex {
            real: real_sq - imag_sq + c.real,
            imag: 2.0 * z.real * z.imag + c.imag,
        };
        iterations += 1;
    }

    iterations
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::InvalidIterationBound);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
