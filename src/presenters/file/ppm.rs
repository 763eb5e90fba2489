use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. PPM has no alpha channel, so alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let mut file = BufWriter::new(File::create(filepath)?);
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // P6 header: magic, dimensions, max channel value
        write!(file, "P6\n{width} {height}\n255\n")?;
        file.write_all(&rgba_to_rgb(buffer.buffer()))?;
        file.flush()?;

        Ok(())
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
