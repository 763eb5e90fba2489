use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} pixel rect",
        pixel.x, pixel.y, pixel_rect.width(), pixel_rect.height()
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image data for a [`PixelRect`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to opaque `colour`.
    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let buffer = colour
            .to_rgba()
            .iter()
            .copied()
            .cycle()
            .take(pixel_rect_to_buffer_size(pixel_rect))
            .collect();

        Self { pixel_rect, buffer }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    /// RGBA value of `pixel`, or `None` outside the rect.
    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        let index = self.pixel_rect.index_of(pixel)? * BYTES_PER_PIXEL;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some([rgba[0], rgba[1], rgba[2], rgba[3]])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.pixel_rect.index_of(pixel) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        };

        let start = index * BYTES_PER_PIXEL;
        self.buffer[start..start + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }
}
