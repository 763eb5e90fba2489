use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColourError {
    #[error("colour {0:?} is not in #rrggbb form")]
    InvalidFormat(String),
}

/// An opaque 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from unclamped channel intensities on a 0..=255 scale.
    ///
    /// Each channel is floored and clamped; NaN becomes 0.
    #[must_use]
    pub fn from_intensities(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.floor().clamp(0.0, 255.0) as u8
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColourError::InvalidFormat(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
