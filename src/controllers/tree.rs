use std::path::Path;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::rasterize_tree::render_tree;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::tree::errors::TreeError;
use crate::core::fractals::tree::grow::TreeStats;
use crate::core::fractals::tree::params::TreeParams;

/// One-shot fractal tree render to a file.
pub struct TreeController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> TreeController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// Draws a tree. Without a `seed` a random one is picked and logged so
    /// the tree can be drawn again.
    pub fn generate(
        &mut self,
        pixel_rect: PixelRect,
        params: &TreeParams,
        background: Colour,
        seed: Option<u64>,
    ) -> Result<TreeStats, TreeError> {
        let seed = seed.unwrap_or_else(rand::random);
        info!(
            "growing {}x{} tree, depth {}, seed {seed}",
            pixel_rect.width(),
            pixel_rect.height(),
            params.max_depth
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let (buffer, stats) = render_tree(pixel_rect, params, background, &mut rng)?;

        info!("{} branches, {} leaves", stats.branches, stats.leaves);
        self.buffer = Some(buffer);

        Ok(stats)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> Result<(), PresentError> {
        let Some(buffer) = &self.buffer else {
            return Err(PresentError::NothingRendered {
                path: filepath.to_path_buf(),
            });
        };

        self.presenter.present(buffer, filepath)?;
        info!("saved to {}", filepath.display());

        Ok(())
    }
}
