use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;

/// Long loops poll their token once per this many pixels.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled")]
pub struct Cancelled;

/// Asked by a render whether it should stop early.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// [`check`](Self::check), but only on every
    /// [`CANCEL_CHECK_INTERVAL_PIXELS`]th pixel `index`.
    #[inline]
    fn check_at(&self, index: usize) -> Result<(), Cancelled> {
        if index % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            self.check()
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled once a newer generation than the one being rendered has been
/// submitted, or when `shutdown` is raised.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    pub generation: u64,
    pub latest: &'a AtomicU64,
    pub shutdown: &'a AtomicBool,
}

impl CancelToken for GenerationToken<'_> {
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.latest.load(Ordering::Relaxed) != self.generation
    }
}
