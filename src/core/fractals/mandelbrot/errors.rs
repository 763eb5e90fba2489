use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    InvalidIterationBound,
    #[error("zoom must be a positive finite number, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("view center must be finite, got ({real}, {imag})")]
    InvalidCenter { real: f64, imag: f64 },
}
