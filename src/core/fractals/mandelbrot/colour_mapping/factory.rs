use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::ColourSchemeKind,
    map::MandelbrotColourMap,
    maps::{
        grayscale::MandelbrotGrayscale, psych::MandelbrotPsych, smooth::MandelbrotSmooth,
        ultra::MandelbrotUltra,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: ColourSchemeKind,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        ColourSchemeKind::Grayscale => Box::new(MandelbrotGrayscale::new(max_iterations)),
        ColourSchemeKind::Smooth => Box::new(MandelbrotSmooth::new(max_iterations)),
        ColourSchemeKind::Ultra => Box::new(MandelbrotUltra::new(max_iterations)),
        ColourSchemeKind::Psych => Box::new(MandelbrotPsych::new(max_iterations)),
    }
}

/// Colour of a single escape time, without building a boxed map.
#[must_use]
pub fn colour_for(iterations: u32, max_iterations: u32, kind: ColourSchemeKind) -> Colour {
    match kind {
        ColourSchemeKind::Grayscale => MandelbrotGrayscale::new(max_iterations).map(iterations),
        ColourSchemeKind::Smooth => MandelbrotSmooth::new(max_iterations).map(iterations),
        ColourSchemeKind::Ultra => MandelbrotUltra::new(max_iterations).map(iterations),
        ColourSchemeKind::Psych => MandelbrotPsych::new(max_iterations).map(iterations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourSchemeKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourSchemeKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn boxed_map_agrees_with_colour_for() {
        for &kind in ColourSchemeKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, 64);
            for iterations in [0, 1, 7, 31, 63, 64] {
                assert_eq!(map.map(iterations), colour_for(iterations, 64, kind));
            }
        }
    }

    #[test]
    fn inside_points_are_black_for_every_scheme() {
        for &kind in ColourSchemeKind::ALL {
            for max_iterations in [1, 10, 1000] {
                assert_eq!(colour_for(max_iterations, max_iterations, kind), Colour::BLACK);
            }
        }
    }

    #[test]
    fn unknown_scheme_name_maps_like_grayscale() {
        let fallback = ColourSchemeKind::from_name_or_default("no-such-scheme");

        assert_eq!(colour_for(25, 100, fallback), Colour::gray(127));
    }
}
