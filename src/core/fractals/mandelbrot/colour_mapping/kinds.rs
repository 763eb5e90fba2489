use crate::core::fractals::mandelbrot::colour_mapping::errors::ParseColourSchemeError;
use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourSchemeKind {
    #[default]
    Grayscale,
    Smooth,
    Ultra,
    Psych,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::Smooth, Self::Ultra, Self::Psych];

    /// Canonical selector name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "default",
            Self::Smooth => "smooth",
            Self::Ultra => "ultra",
            Self::Psych => "psych",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Smooth => "Smooth",
            Self::Ultra => "Ultra",
            Self::Psych => "Psychedelic",
        }
    }

    /// Parses a selector name, falling back to the default scheme for
    /// anything unrecognised.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ParseColourSchemeError| {
            let fallback = Self::default();
            warn!("{err}, using {}", fallback.name());
            fallback
        })
    }
}

impl FromStr for ColourSchemeKind {
    type Err = ParseColourSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColourSchemeError::UnknownColourScheme(s.to_string()))
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
