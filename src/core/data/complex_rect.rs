use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// An axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts; the imaginary axis
/// grows downwards to match pixel rows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Region of `range_real` x `range_imag` centred on `center`.
    ///
    /// Not validated: at extreme zoom the extent may collapse to zero in f64,
    /// which renders as a flat image rather than an error.
    #[must_use]
    pub fn centered(center: Complex, range_real: f64, range_imag: f64) -> Self {
        Self {
            top_left: Complex {
                real: center.real - range_real / 2.0,
                imag: center.imag - range_imag / 2.0,
            },
            bottom_right: Complex {
                real: center.real + range_real / 2.0,
                imag: center.imag + range_imag / 2.0,
            },
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}
