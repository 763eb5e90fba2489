use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::render_mandelbrot::{RenderError, render_mandelbrot_cancelable};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    frame_sink: Arc<dyn FrameSink>,
}

/// Renders the most recently submitted request on a background thread.
///
/// Submitting a new request cancels whatever the worker is doing; only
/// results for the newest generation ever reach the [`FrameSink`].
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(frame_sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            frame_sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = GenerationToken {
                generation: job_generation,
                latest: &shared.generation,
                shutdown: &shared.shutdown,
            };

            let start = Instant::now();
            let result = render_mandelbrot_cancelable(request.pixel_rect, &request.view, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    view: request.view,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderError::Cancelled(_)) => {
                    debug!("generation {job_generation} cancelled");
                    continue;
                }
                Err(err) => RenderEvent::Error(RenderFailure {
                    generation: job_generation,
                    message: err.to_string(),
                }),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("discarding stale generation {job_generation}");
                continue;
            }

            if let RenderEvent::Frame(frame) = &event {
                info!(
                    "generation {job_generation}: {}x{} frame in {:?}",
                    request.pixel_rect.width(),
                    request.pixel_rect.height(),
                    frame.render_duration
                );
            }

            shared.frame_sink.present(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
