use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Picks a presenter from the extension of `filepath`, case-insensitively.
pub fn file_presenter_for_path(filepath: &Path) -> Result<Box<dyn FilePresenterPort>, PresentError> {
    let extension = filepath
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "ppm" => Ok(Box::new(PpmFilePresenter::new())),
        "png" => Ok(Box::new(PngFilePresenter::new())),
        _ => Err(PresentError::UnsupportedFormat { extension }),
    }
}
