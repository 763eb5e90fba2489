use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> ColourSchemeKind;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// `iterations / max_iterations` for escaped points, `None` for points
/// treated as inside the set.
pub(crate) fn escape_fraction(iterations: u32, max_iterations: u32) -> Option<f64> {
    if iterations >= max_iterations {
        return None;
    }

    Some(f64::from(iterations) / f64::from(max_iterations))
}
