use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, escape_fraction,
};

/// Bernstein-polynomial palette: dark blue for fast escapers through orange
/// near the boundary.
#[derive(Debug)]
pub struct MandelbrotSmooth {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotSmooth {
    fn map(&self, iterations: u32) -> Colour {
        let Some(t) = escape_fraction(iterations, self.max_iterations) else {
            return Colour::BLACK;
        };
        let u = 1.0 - t;

        Colour::from_intensities(
            9.0 * u * t * t * t * 255.0,
            15.0 * u * u * t * t * 255.0,
            8.5 * u * u * u * t * 255.0,
        )
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSmooth {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Smooth
    }
}

impl MandelbrotSmooth {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        assert_eq!(MandelbrotSmooth::new(100).map(100), Colour::BLACK);
    }

    #[test]
    fn test_map_zero_iterations_is_black() {
        assert_eq!(MandelbrotSmooth::new(100).map(0), Colour::BLACK);
    }

    #[test]
    fn test_map_half() {
        // r = 9 * 0.5^4 * 255, g = 15 * 0.5^4 * 255, b = 8.5 * 0.5^4 * 255
        assert_eq!(MandelbrotSmooth::new(100).map(50), Colour::new(143, 239, 135));
    }

    #[test]
    fn test_green_peaks_mid_range() {
        let mapper = MandelbrotSmooth::new(1000);

        assert!(mapper.map(500).g > 230);
        assert!(mapper.map(100).g < mapper.map(500).g);
        assert!(mapper.map(900).g < mapper.map(500).g);
    }
}
