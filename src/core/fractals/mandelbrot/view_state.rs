use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Width of the visible complex plane at zoom 1.
pub const BASE_RANGE_REAL: f64 = 3.5;
/// Height of the visible complex plane at zoom 1.
pub const BASE_RANGE_IMAG: f64 = 2.0;

/// Immutable snapshot of everything a Mandelbrot render depends on.
///
/// Navigation never mutates a view; it returns a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
    colour_scheme: ColourSchemeKind,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourSchemeKind::default(),
        }
    }
}

impl ViewState {
    pub fn new(
        center: Complex,
        zoom: f64,
        max_iterations: u32,
        colour_scheme: ColourSchemeKind,
    ) -> Result<Self, MandelbrotError> {
        let view = Self {
            center,
            zoom,
            max_iterations,
            colour_scheme,
        };
        view.validate()?;

        Ok(view)
    }

    /// Checks the invariants a render relies on.
    ///
    /// Views built through [`ViewState::new`] and the `with_*` methods are
    /// always valid; navigation can still push zoom to infinity.
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::InvalidIterationBound);
        }

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom { zoom: self.zoom });
        }

        if !self.center.is_finite() {
            return Err(MandelbrotError::InvalidCenter {
                real: self.center.real,
                imag: self.center.imag,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourSchemeKind {
        self.colour_scheme
    }

    #[must_use]
    pub fn range_real(&self) -> f64 {
        BASE_RANGE_REAL / self.zoom
    }

    #[must_use]
    pub fn range_imag(&self) -> f64 {
        BASE_RANGE_IMAG / self.zoom
    }

    /// The visible region of the complex plane.
    #[must_use]
    pub fn viewport(&self) -> ComplexRect {
        ComplexRect::centered(self.center, self.range_real(), self.range_imag())
    }

    pub fn with_center(self, center: Complex) -> Result<Self, MandelbrotError> {
        Self::new(center, self.zoom, self.max_iterations, self.colour_scheme)
    }

    pub fn with_zoom(self, zoom: f64) -> Result<Self, MandelbrotError> {
        Self::new(self.center, zoom, self.max_iterations, self.colour_scheme)
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::new(self.center, self.zoom, max_iterations, self.colour_scheme)
    }

    #[must_use]
    pub fn with_colour_scheme(self, colour_scheme: ColourSchemeKind) -> Self {
        Self {
            colour_scheme,
            ..self
        }
    }

    // Navigation is the one place allowed to skip validation.
    pub(crate) fn recentred(self, center: Complex, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            ..self
        }
    }
}
