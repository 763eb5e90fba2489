use crate::core::data::colour::ParseColourError;
use crate::core::fractals::tree::params::MAX_TREE_DEPTH;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("tree depth must be between 1 and {MAX_TREE_DEPTH}, got {depth}")]
    InvalidDepth { depth: u32 },
    #[error("length factor must be strictly between 0 and 1, got {factor}")]
    InvalidLengthFactor { factor: f64 },
    #[error("line width must be positive and finite, got {width}")]
    InvalidLineWidth { width: f64 },
    #[error("branch angle must be finite, got {angle}")]
    InvalidAngle { angle: f64 },
    #[error("invalid colour: {0}")]
    InvalidColour(#[from] ParseColourError),
}
