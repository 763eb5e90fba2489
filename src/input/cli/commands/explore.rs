use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::controllers::interactive::{
    ExplorerState, FrameSink, InteractiveController, RenderEvent,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::input::cli::args::ExploreArgs;
use crate::input::cli::session_script::{SessionCommand, parse_session_line};
use crate::presenters::file::factory::file_presenter_for_path;
use crate::presenters::frame::latest_frame::LatestFrameSink;

/// What an `explore` session did, reported once input runs out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ExploreSummary {
    pub renders_submitted: u64,
    pub frames_written: u64,
    pub lines_skipped: u64,
}

pub struct ExploreCommand {
    args: ExploreArgs,
}

impl ExploreCommand {
    pub fn new(args: ExploreArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<ExploreSummary, Box<dyn Error>> {
        self.run(io::stdin().lock())
    }

    /// Drives an interactive session from `input`, one command per line.
    ///
    /// Every state change submits a render; `render` and the end of input
    /// wait for the newest frame and write it to the output file.
    pub fn run<R: BufRead>(&self, input: R) -> Result<ExploreSummary, Box<dyn Error>> {
        let presenter = file_presenter_for_path(&self.args.output)?;
        let mut state = ExplorerState::new(self.args.frame.pixel_rect()?);
        let sink = Arc::new(LatestFrameSink::default());
        let mut controller = InteractiveController::new(Arc::clone(&sink) as Arc<dyn FrameSink>);
        let mut session = Session {
            presenter: &*presenter,
            output: &self.args.output,
            sink: &sink,
            summary: ExploreSummary::default(),
            last_written_generation: 0,
        };

        session.submit(&controller, &mut state);

        for (index, line) in input.lines().enumerate() {
            let line = line?;

            match parse_session_line(&line) {
                Ok(None) => {}
                Ok(Some(SessionCommand::Render)) => session.write_newest(&state)?,
                Ok(Some(SessionCommand::Apply(event))) => match state.apply(event) {
                    Ok(()) => session.submit(&controller, &mut state),
                    Err(err) => session.skip(index, &err),
                },
                Err(err) => session.skip(index, &err),
            }
        }

        session.write_newest(&state)?;
        controller.shutdown();

        info!(
            "explore finished: {} renders submitted, {} frames written, {} lines skipped",
            session.summary.renders_submitted,
            session.summary.frames_written,
            session.summary.lines_skipped
        );

        Ok(session.summary)
    }
}

struct Session<'a> {
    presenter: &'a dyn FilePresenterPort,
    output: &'a Path,
    sink: &'a LatestFrameSink,
    summary: ExploreSummary,
    last_written_generation: u64,
}

impl Session<'_> {
    fn submit(&mut self, controller: &InteractiveController, state: &mut ExplorerState) {
        let request = state.build_render_request();

        if state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = controller.submit_request(Arc::clone(&request));
            state.record_submission(request, generation);
            self.summary.renders_submitted += 1;
        }
    }

    fn skip(&mut self, index: usize, err: &dyn Error) {
        warn!("line {}: {err}, skipped", index + 1);
        self.summary.lines_skipped += 1;
    }

    fn write_newest(&mut self, state: &ExplorerState) -> Result<(), Box<dyn Error>> {
        let generation = state.latest_submitted_generation();
        if generation == self.last_written_generation {
            return Ok(());
        }

        let written = self
            .sink
            .wait_for_generation(generation, |event| self.present_event(event))?;

        self.last_written_generation = generation;
        if written {
            self.summary.frames_written += 1;
        }

        Ok(())
    }

    fn present_event(&self, event: &RenderEvent) -> Result<bool, Box<dyn Error>> {
        match event {
            RenderEvent::Frame(frame) => {
                self.presenter.present(&frame.pixel_buffer, self.output)?;
                info!(
                    "frame {} written to {} ({:?})",
                    frame.generation,
                    self.output.display(),
                    frame.render_duration
                );
                Ok(true)
            }
            RenderEvent::Error(failure) => {
                warn!("frame {} failed: {}", failure.generation, failure.message);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::cli::args::FrameArgs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn command(output: PathBuf) -> ExploreCommand {
        ExploreCommand::new(ExploreArgs {
            frame: FrameArgs {
                width: 16,
                height: 12,
            },
            output,
        })
    }

    fn read_ppm_size(path: &std::path::Path) -> usize {
        std::fs::read(path).unwrap().len()
    }

    #[test]
    fn test_empty_session_writes_initial_frame() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("explore.ppm");

        let summary = command(output.clone()).run(Cursor::new("")).unwrap();

        assert_eq!(
            summary,
            ExploreSummary {
                renders_submitted: 1,
                frames_written: 1,
                lines_skipped: 0
            }
        );
        assert_eq!(read_ppm_size(&output), "P6\n16 12\n255\n".len() + 16 * 12 * 3);
    }

    #[test]
    fn test_session_applies_commands_and_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("explore.png");
        let script = "\
            click 0.5 0.5\n\
            render\n\
            fly away\n\
            iterations 0\n\
            pixel 99 99\n\
            scheme psych\n\
            # comment\n\
            render\n\
            render\n";

        let summary = command(output.clone()).run(Cursor::new(script)).unwrap();

        assert_eq!(summary.renders_submitted, 3);
        assert_eq!(summary.frames_written, 2);
        assert_eq!(summary.lines_skipped, 3);
        assert!(output.exists());
    }

    #[test]
    fn test_unchanged_state_is_not_resubmitted() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("explore.ppm");

        let summary = command(output)
            .run(Cursor::new("scheme default\nresize 16 12\n"))
            .unwrap();

        assert_eq!(summary.renders_submitted, 1);
    }

    #[test]
    fn test_non_finite_click_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("explore.ppm");

        let summary = command(output)
            .run(Cursor::new("click nan 0.5\nrender\n"))
            .unwrap();

        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(summary.renders_submitted, 1);
    }

    #[test]
    fn test_unsupported_output_fails_up_front() {
        let dir = tempfile::tempdir().unwrap();

        let result = command(dir.path().join("explore.gif")).run(Cursor::new("render\n"));

        assert!(result.is_err());
    }
}
