use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Computes `algorithm` for every pixel, in row-major order, on the calling
/// thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
