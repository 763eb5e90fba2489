use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

/// Error type for cancelable pixel buffer generation.
#[derive(Debug, Error)]
pub enum GeneratePixelBufferCancelableError {
    /// The operation was cancelled before completion.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    /// A pixel buffer construction error occurred.
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates an RGBA pixel buffer by mapping input values to colours.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::PixelBuffer(err) => err,
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates a pixel buffer with cancellation support.
///
/// Streams RGBA bytes into a preallocated buffer, polling `cancel` through
/// [`CancelToken::check_at`].
/// Every pixel is fully opaque.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = pixel_rect.size() as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        cancel.check_at(i)?;

        buffer.extend_from_slice(&mapper.map(value).to_rgba());
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
