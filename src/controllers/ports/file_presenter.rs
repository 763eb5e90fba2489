use std::error::Error;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode {format} image: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("unsupported image format {extension:?}, expected ppm or png")]
    UnsupportedFormat { extension: String },
    #[error("nothing rendered yet, {} not written", path.display())]
    NothingRendered { path: PathBuf },
}

/// Writes a finished frame somewhere on disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError>;
}

impl FilePresenterPort for Box<dyn FilePresenterPort> {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        self.as_ref().present(buffer, filepath)
    }
}
