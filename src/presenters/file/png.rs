use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageError, ImageFormat, RgbaImage};
use std::path::Path;

/// RGBA PNG writer backed by the `image` crate.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let pixel_rect = buffer.pixel_rect();
        let image = RgbaImage::from_raw(
            pixel_rect.width(),
            pixel_rect.height(),
            buffer.buffer().to_vec(),
        )
        .ok_or_else(|| PresentError::Encode {
            format: "png",
            source: "pixel data does not match image dimensions".into(),
        })?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(|err| match err {
                ImageError::IoError(io) => PresentError::Io(io),
                other => PresentError::Encode {
                    format: "png",
                    source: Box::new(other),
                },
            })
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
