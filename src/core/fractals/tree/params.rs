use crate::core::data::colour::Colour;
use crate::core::fractals::tree::errors::TreeError;

pub const MAX_TREE_DEPTH: u32 = 14;

pub const DEFAULT_BRANCH_COLOUR: Colour = Colour::new(0x8b, 0x45, 0x13);
pub const DEFAULT_LEAF_COLOUR: Colour = Colour::new(0x22, 0x8b, 0x22);

/// Shape and colouring of a fractal tree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TreeParams {
    /// Spread between a branch and each of its side children.
    pub angle_degrees: f64,
    pub max_depth: u32,
    /// Child length relative to its parent.
    pub length_factor: f64,
    /// Trunk stroke width in pixels.
    pub line_width: f64,
    pub branch_colour: Colour,
    pub leaf_colour: Colour,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            angle_degrees: 25.0,
            max_depth: 10,
            length_factor: 0.75,
            line_width: 10.0,
            branch_colour: DEFAULT_BRANCH_COLOUR,
            leaf_colour: DEFAULT_LEAF_COLOUR,
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), TreeError> {
        if !(1..=MAX_TREE_DEPTH).contains(&self.max_depth) {
            return Err(TreeError::InvalidDepth {
                depth: self.max_depth,
            });
        }

        if !(self.length_factor > 0.0 && self.length_factor < 1.0) {
            return Err(TreeError::InvalidLengthFactor {
                factor: self.length_factor,
            });
        }

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(TreeError::InvalidLineWidth {
                width: self.line_width,
            });
        }

        if !self.angle_degrees.is_finite() {
            return Err(TreeError::InvalidAngle {
                angle: self.angle_degrees,
            });
        }

        Ok(())
    }

    /// Replaces both colours from `#rrggbb` strings.
    pub fn with_hex_colours(self, branch: &str, leaf: &str) -> Result<Self, TreeError> {
        Ok(Self {
            branch_colour: branch.parse()?,
            leaf_colour: leaf.parse()?,
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::ParseColourError;

    #[test]
    fn test_default_params_are_valid() {
        assert_eq!(TreeParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_depth_bounds() {
        let shallow = TreeParams {
            max_depth: 0,
            ..TreeParams::default()
        };
        let deep = TreeParams {
            max_depth: MAX_TREE_DEPTH + 1,
            ..TreeParams::default()
        };
        let deepest = TreeParams {
            max_depth: MAX_TREE_DEPTH,
            ..TreeParams::default()
        };

        assert_eq!(shallow.validate(), Err(TreeError::InvalidDepth { depth: 0 }));
        assert_eq!(
            deep.validate(),
            Err(TreeError::InvalidDepth { depth: 15 })
        );
        assert_eq!(deepest.validate(), Ok(()));
    }

    #[test]
    fn test_length_factor_must_be_open_unit_interval() {
        for factor in [0.0, 1.0, -0.5, f64::NAN] {
            let params = TreeParams {
                length_factor: factor,
                ..TreeParams::default()
            };

            assert!(matches!(
                params.validate(),
                Err(TreeError::InvalidLengthFactor { .. })
            ));
        }
    }

    #[test]
    fn test_line_width_must_be_positive() {
        let params = TreeParams {
            line_width: 0.0,
            ..TreeParams::default()
        };

        assert_eq!(
            params.validate(),
            Err(TreeError::InvalidLineWidth { width: 0.0 })
        );
    }

    #[test]
    fn test_with_hex_colours() {
        let params = TreeParams::default()
            .with_hex_colours("#ffffff", "#000000")
            .unwrap();

        assert_eq!(params.branch_colour, Colour::WHITE);
        assert_eq!(params.leaf_colour, Colour::BLACK);
    }

    #[test]
    fn test_with_hex_colours_rejects_bad_input() {
        let result = TreeParams::default().with_hex_colours("brown", "#228b22");

        assert_eq!(
            result,
            Err(TreeError::InvalidColour(ParseColourError::InvalidFormat(
                "brown".to_string()
            )))
        );
    }
}
