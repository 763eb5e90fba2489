use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_fraction,
};

/// Sinusoidal bands driven by the raw iteration count, so the banding does
/// not change when the iteration bound does.
#[derive(Debug)]
pub struct MandelbrotPsych {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotPsych {
    fn map(&self, iterations: u32) -> Colour {
        if escape_fraction(iterations, self.max_iterations).is_none() {
            return Colour::BLACK;
        }
        let n = f64::from(iterations);

        Colour::from_intensities(
            128.0 + 127.0 * (n * 0.1).sin(),
            128.0 + 127.0 * (n * 0.05).cos(),
            128.0 + 127.0 * (n * 0.02).sin(),
        )
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPsych {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Psych
    }
}

impl MandelbrotPsych {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
