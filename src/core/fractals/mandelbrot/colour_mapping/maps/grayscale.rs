use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_fraction,
};

/// Gray level `255 * sqrt(t)`; the square root spreads out the fast
/// escapers that would otherwise all be near black.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotGrayscale {
    fn map(&self, iterations: u32) -> Colour {
        let Some(t) = escape_fraction(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };

        let gray = 255.0 * t.sqrt();
        Colour::from_intensities(gray, gray, gray)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
