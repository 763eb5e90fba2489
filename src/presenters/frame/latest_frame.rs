use std::sync::{Condvar, Mutex, PoisonError};

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;

/// Keeps only the newest event from the interactive controller and lets
/// another thread block until a given generation has arrived.
#[derive(Default)]
pub struct LatestFrameSink {
    latest: Mutex<Option<RenderEvent>>,
    ready: Condvar,
}

impl FrameSink for LatestFrameSink {
    fn present(&self, event: RenderEvent) {
        let mut guard = self.latest.lock().unwrap_or_else(PoisonError::into_inner);

        if guard
            .as_ref()
            .is_none_or(|latest| latest.generation() < event.generation())
        {
            *guard = Some(event);
            self.ready.notify_all();
        }
    }
}

impl LatestFrameSink {
    /// Blocks until an event for `generation` or newer has been presented,
    /// then runs `f` on it.
    pub fn wait_for_generation<T>(&self, generation: u64, f: impl FnOnce(&RenderEvent) -> T) -> T {
        let guard = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .ready
            .wait_while(guard, |latest| {
                latest
                    .as_ref()
                    .is_none_or(|event| event.generation() < generation)
            })
            .unwrap_or_else(PoisonError::into_inner);

        match guard.as_ref() {
            Some(event) => f(event),
            None => unreachable!("wait_while only returns once an event is stored"),
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> Option<u64> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(RenderEvent::generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::errors::render_failure::RenderFailure;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn failure(generation: u64) -> RenderEvent {
        RenderEvent::Error(RenderFailure {
            generation,
            message: format!("failure {generation}"),
        })
    }

    #[test]
    fn test_keeps_newest_event_only() {
        let sink = LatestFrameSink::default();

        sink.present(failure(2));
        sink.present(failure(1));

        assert_eq!(sink.latest_generation(), Some(2));
    }

    #[test]
    fn test_wait_returns_immediately_when_generation_present() {
        let sink = LatestFrameSink::default();
        sink.present(failure(3));

        let generation = sink.wait_for_generation(2, RenderEvent::generation);

        assert_eq!(generation, 3);
    }

    #[test]
    fn test_wait_blocks_until_generation_arrives() {
        let sink = Arc::new(LatestFrameSink::default());
        let producer = Arc::clone(&sink);

        let handle = thread::spawn(move || {
            producer.present(failure(1));
            thread::sleep(Duration::from_millis(20));
            producer.present(failure(2));
        });

        let generation = sink.wait_for_generation(2, RenderEvent::generation);
        handle.join().unwrap();

        assert_eq!(generation, 2);
    }
}
