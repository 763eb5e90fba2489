//! Command-line adapter.

pub mod args;
pub mod commands;
pub mod session_script;

use std::error::Error;

use args::{Cli, Command};
use commands::explore::ExploreCommand;
use commands::grow_tree::GrowTreeCommand;
use commands::render_mandelbrot::RenderMandelbrotCommand;

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Mandelbrot(args) => {
            RenderMandelbrotCommand::new(args).execute()?;
        }
        Command::Tree(args) => {
            GrowTreeCommand::new(args).execute()?;
        }
        Command::Explore(args) => {
            ExploreCommand::new(args).execute()?;
        }
    }

    Ok(())
}
