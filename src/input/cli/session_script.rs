//! Line-oriented command language read by `explore`.
//!
//! ```text
//! click 0.25 0.5     # zoom in on a point given as frame fractions
//! pixel 200 150      # zoom in on a pixel
//! iterations 500
//! zoom 4
//! center -0.75 0.1
//! scheme ultra
//! resize 640 480
//! reset
//! render             # write the newest frame to the output file
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::controllers::interactive::ExplorerEvent;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionCommand {
    Apply(ExplorerEvent),
    Render,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseSessionLineError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command} expects {expected} argument(s), got {found}")]
    WrongArgumentCount {
        command: String,
        expected: usize,
        found: usize,
    },
    #[error("{command}: {value:?} is not a valid number")]
    InvalidNumber { command: String, value: String },
    #[error(transparent)]
    InvalidSize(#[from] PixelRectError),
}

/// Parses one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_session_line(line: &str) -> Result<Option<SessionCommand>, ParseSessionLineError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let command = command.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let event = match command.as_str() {
        "render" => {
            expect_args(&command, &args, 0)?;
            return Ok(Some(SessionCommand::Render));
        }
        "reset" => {
            expect_args(&command, &args, 0)?;
            ExplorerEvent::Reset
        }
        "click" => {
            expect_args(&command, &args, 2)?;
            ExplorerEvent::ClickFraction {
                x: number(&command, args[0])?,
                y: number(&command, args[1])?,
            }
        }
        "pixel" => {
            expect_args(&command, &args, 2)?;
            ExplorerEvent::ClickPixel(Point::new(
                number(&command, args[0])?,
                number(&command, args[1])?,
            ))
        }
        "iterations" => {
            expect_args(&command, &args, 1)?;
            ExplorerEvent::SetIterations(number(&command, args[0])?)
        }
        "zoom" => {
            expect_args(&command, &args, 1)?;
            ExplorerEvent::SetZoom(number(&command, args[0])?)
        }
        "center" => {
            expect_args(&command, &args, 2)?;
            ExplorerEvent::SetCenter(Complex::new(
                number(&command, args[0])?,
                number(&command, args[1])?,
            ))
        }
        "scheme" => {
            expect_args(&command, &args, 1)?;
            ExplorerEvent::SetColourScheme(ColourSchemeKind::from_name_or_default(args[0]))
        }
        "resize" => {
            expect_args(&command, &args, 2)?;
            ExplorerEvent::Resize(PixelRect::new(
                number(&command, args[0])?,
                number(&command, args[1])?,
            )?)
        }
        _ => return Err(ParseSessionLineError::UnknownCommand(command)),
    };

    Ok(Some(SessionCommand::Apply(event)))
}

fn expect_args(command: &str, args: &[&str], expected: usize) -> Result<(), ParseSessionLineError> {
    if args.len() != expected {
        return Err(ParseSessionLineError::WrongArgumentCount {
            command: command.to_string(),
            expected,
            found: args.len(),
        });
    }

    Ok(())
}

fn number<T: FromStr>(command: &str, value: &str) -> Result<T, ParseSessionLineError> {
    value
        .parse()
        .map_err(|_| ParseSessionLineError::InvalidNumber {
            command: command.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(event: ExplorerEvent) -> Result<Option<SessionCommand>, ParseSessionLineError> {
        Ok(Some(SessionCommand::Apply(event)))
    }

    #[test]
    fn test_parses_every_command() {
        assert_eq!(
            parse_session_line("click 0.25 0.5"),
            apply(ExplorerEvent::ClickFraction { x: 0.25, y: 0.5 })
        );
        assert_eq!(
            parse_session_line("pixel 10 20"),
            apply(ExplorerEvent::ClickPixel(Point::new(10, 20)))
        );
        assert_eq!(parse_session_line("reset"), apply(ExplorerEvent::Reset));
        assert_eq!(
            parse_session_line("iterations 250"),
            apply(ExplorerEvent::SetIterations(250))
        );
        assert_eq!(
            parse_session_line("zoom 16"),
            apply(ExplorerEvent::SetZoom(16.0))
        );
        assert_eq!(
            parse_session_line("center -0.75 0.1"),
            apply(ExplorerEvent::SetCenter(Complex::new(-0.75, 0.1)))
        );
        assert_eq!(
            parse_session_line("scheme ULTRA"),
            apply(ExplorerEvent::SetColourScheme(ColourSchemeKind::Ultra))
        );
        assert_eq!(
            parse_session_line("resize 64 48"),
            apply(ExplorerEvent::Resize(PixelRect::new(64, 48).unwrap()))
        );
        assert_eq!(parse_session_line("render"), Ok(Some(SessionCommand::Render)));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_session_line(""), Ok(None));
        assert_eq!(parse_session_line("   "), Ok(None));
        assert_eq!(parse_session_line("# just a note"), Ok(None));
        assert_eq!(
            parse_session_line("  Reset  # back home"),
            apply(ExplorerEvent::Reset)
        );
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_default() {
        assert_eq!(
            parse_session_line("scheme rainbow"),
            apply(ExplorerEvent::SetColourScheme(ColourSchemeKind::Grayscale))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_session_line("fly 1 2"),
            Err(ParseSessionLineError::UnknownCommand("fly".to_string()))
        );
        assert_eq!(
            parse_session_line("click 0.5"),
            Err(ParseSessionLineError::WrongArgumentCount {
                command: "click".to_string(),
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_session_line("pixel -1 3"),
            Err(ParseSessionLineError::InvalidNumber {
                command: "pixel".to_string(),
                value: "-1".to_string()
            })
        );
        assert!(matches!(
            parse_session_line("resize 0 10"),
            Err(ParseSessionLineError::InvalidSize(_))
        ));
    }
}
