use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_fraction,
};

#[derive(Debug)]
pub struct MandelbrotUltra {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotUltra {
    fn map(&self, iterations: u32) -> Colour {
        let Some(t) = escape_fraction(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };

        Colour::from_intensities(
            255.0 * t.powf(0.25),
            255.0 * t.powf(0.5),
            255.0 * t.powf(0.75),
        )
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotUltra {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Ultra
    }
}

impl MandelbrotUltra {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
