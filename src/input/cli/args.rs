use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::view_state::{
    DEFAULT_CENTER, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM,
};
use crate::core::fractals::tree::params::TreeParams;

#[derive(Parser, Debug)]
#[command(
    name = "fractal_canvas",
    version,
    about = "Escape-time Mandelbrot and fractal tree renderer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one Mandelbrot frame to a PPM or PNG file
    Mandelbrot(MandelbrotArgs),
    /// Grow a random fractal tree and save it
    Tree(TreeArgs),
    /// Read navigation commands from stdin and keep the newest frame on disk
    Explore(ExploreArgs),
}

#[derive(Args, Debug, Copy, Clone)]
pub struct FrameArgs {
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

impl FrameArgs {
    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::new(self.width, self.height)
    }
}

#[derive(Args, Debug, Clone)]
pub struct MandelbrotArgs {
    #[command(flatten)]
    pub frame: FrameArgs,
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    pub center_real: f64,
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    pub center_imag: f64,
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,
    /// default, smooth, ultra or psych; anything else falls back to default
    #[arg(long, default_value = "default")]
    pub scheme: String,
    /// Zoom in on X,Y given as fractions of the frame; repeat to zoom further
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    pub clicks: Vec<(f64, f64)>,
    /// Spread rows across all cores
    #[arg(long)]
    pub parallel: bool,
    #[arg(short, long, default_value = "mandelbrot.png")]
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    #[command(flatten)]
    pub frame: FrameArgs,
    #[arg(long, default_value_t = TreeParams::default().angle_degrees)]
    pub angle: f64,
    #[arg(long, default_value_t = TreeParams::default().max_depth)]
    pub depth: u32,
    #[arg(long, default_value_t = TreeParams::default().length_factor)]
    pub length_factor: f64,
    #[arg(long, default_value_t = TreeParams::default().line_width)]
    pub line_width: f64,
    #[arg(long, default_value = "#8b4513")]
    pub branch_colour: String,
    #[arg(long, default_value = "#228b22")]
    pub leaf_colour: String,
    #[arg(long, default_value = "#ffffff")]
    pub background: String,
    /// Seed for a reproducible tree; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short, long, default_value = "tree.png")]
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub frame: FrameArgs,
    #[arg(short, long, default_value = "explore.png")]
    pub output: PathBuf,
}

fn parse_click(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|err| format!("{v:?} is not a number: {err}"))
    };

    Ok((parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mandelbrot_defaults() {
        let cli = Cli::try_parse_from(["fractal_canvas", "mandelbrot"]).unwrap();

        let Command::Mandelbrot(args) = cli.command else {
            panic!("expected mandelbrot subcommand");
        };
        assert_eq!((args.frame.width, args.frame.height), (800, 600));
        assert_eq!(args.center_real, -0.5);
        assert_eq!(args.center_imag, 0.0);
        assert_eq!(args.zoom, 1.0);
        assert_eq!(args.iterations, 100);
        assert_eq!(args.scheme, "default");
        assert!(args.clicks.is_empty());
        assert!(!args.parallel);
        assert_eq!(args.output, PathBuf::from("mandelbrot.png"));
    }

    #[test]
    fn test_mandelbrot_clicks_and_negative_center() {
        let cli = Cli::try_parse_from([
            "fractal_canvas",
            "mandelbrot",
            "--center-real",
            "-1.25",
            "--click",
            "0.5,0.25",
            "--click",
            "0.1, 0.9",
            "--parallel",
            "-o",
            "out.ppm",
        ])
        .unwrap();

        let Command::Mandelbrot(args) = cli.command else {
            panic!("expected mandelbrot subcommand");
        };
        assert_eq!(args.center_real, -1.25);
        assert_eq!(args.clicks, vec![(0.5, 0.25), (0.1, 0.9)]);
        assert!(args.parallel);
        assert_eq!(args.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_bad_click_is_rejected() {
        let result = Cli::try_parse_from(["fractal_canvas", "mandelbrot", "--click", "0.5"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_tree_defaults_match_params() {
        let cli = Cli::try_parse_from(["fractal_canvas", "tree", "--seed", "7"]).unwrap();

        let Command::Tree(args) = cli.command else {
            panic!("expected tree subcommand");
        };
        let defaults = TreeParams::default();
        assert_eq!(args.angle, defaults.angle_degrees);
        assert_eq!(args.depth, defaults.max_depth);
        assert_eq!(args.length_factor, defaults.length_factor);
        assert_eq!(args.line_width, defaults.line_width);
        assert_eq!(args.branch_colour, defaults.branch_colour.to_string());
        assert_eq!(args.leaf_colour, defaults.leaf_colour.to_string());
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("0.25,0.75"), Ok((0.25, 0.75)));
        assert!(parse_click("a,b").is_err());
        assert!(parse_click("0.5;0.5").is_err());
    }
}
