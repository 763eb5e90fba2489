use clap::Parser;
use fractal_canvas::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    fractal_canvas::run(Cli::parse())
}
