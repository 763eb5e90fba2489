use std::error::Error;

use crate::controllers::tree::TreeController;
use crate::core::data::colour::Colour;
use crate::core::fractals::tree::grow::TreeStats;
use crate::core::fractals::tree::params::TreeParams;
use crate::input::cli::args::TreeArgs;
use crate::presenters::file::factory::file_presenter_for_path;

pub struct GrowTreeCommand {
    args: TreeArgs,
}

impl GrowTreeCommand {
    pub fn new(args: TreeArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<TreeStats, Box<dyn Error>> {
        let args = &self.args;
        let pixel_rect = args.frame.pixel_rect()?;
        let presenter = file_presenter_for_path(&args.output)?;

        let params = TreeParams {
            angle_degrees: args.angle,
            max_depth: args.depth,
            length_factor: args.length_factor,
            line_width: args.line_width,
            ..TreeParams::default()
        }
        .with_hex_colours(&args.branch_colour, &args.leaf_colour)?;
        let background: Colour = args.background.parse()?;

        let mut controller = TreeController::new(presenter);
        let stats = controller.generate(pixel_rect, &params, background, args.seed)?;
        controller.write(&args.output)?;

        Ok(stats)
    }
}
