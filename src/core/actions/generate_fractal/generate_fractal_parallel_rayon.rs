use log::trace;
use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to handle each case appropriately (e.g., not displaying cancellation as errors).
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    /// The operation was cancelled before completion.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    /// The fractal algorithm reported a failure.
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Output is row-major and identical to
/// [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
{
    generate_fractal_parallel_rayon_cancelable(pixel_rect, algorithm, &NeverCancel).map_err(
        |e| match e {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        },
    )
}

/// Generates fractal data in parallel with cancellation support.
///
/// Processes rows in parallel, checking for cancellation at the start of each
/// row and then as often as [`CancelToken::check_at`] polls.
///
/// Returns [`GenerateFractalError::Cancelled`] if cancellation was requested,
/// which should be handled as expected control flow (not an error to display).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0
        ..pixel_rect.height())
        .into_par_iter()
        .map(|y| -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>> {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..pixel_rect.width() {
                cancel
                    .check_at(x as usize)
                    .inspect_err(|_| trace!("row {y} abandoned at x {x}"))?;

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
