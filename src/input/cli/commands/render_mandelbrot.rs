use std::error::Error;

use crate::controllers::mandelbrot::MandelbrotController;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::navigation::zoom_at;
use crate::core::fractals::mandelbrot::view_state::ViewState;
use crate::input::cli::args::MandelbrotArgs;
use crate::presenters::file::factory::file_presenter_for_path;

pub struct RenderMandelbrotCommand {
    args: MandelbrotArgs,
}

impl RenderMandelbrotCommand {
    pub fn new(args: MandelbrotArgs) -> Self {
        Self { args }
    }

    /// Builds the view, applies each click in order, renders and saves.
    pub fn execute(&self) -> Result<ViewState, Box<dyn Error>> {
        let args = &self.args;
        let pixel_rect = args.frame.pixel_rect()?;
        let presenter = file_presenter_for_path(&args.output)?;

        let view = ViewState::new(
            Complex::new(args.center_real, args.center_imag),
            args.zoom,
            args.iterations,
            ColourSchemeKind::from_name_or_default(&args.scheme),
        )?;
        let view = args
            .clicks
            .iter()
            .fold(view, |view, &(x, y)| zoom_at(view, x, y));

        let mut controller = MandelbrotController::new(presenter);
        controller.generate(pixel_rect, &view, args.parallel)?;
        controller.write(&args.output)?;

        Ok(view)
    }
}
