//! Progress and error notifications emitted while a batch runs.

use crate::error::FileError;
use std::path::{Path, PathBuf};

/// Receives notifications from a running batch.
///
/// Every method has an empty default, so implementors only override what
/// they display. Calls are never made concurrently, even from
/// [`BatchProcessor::run_parallel`](crate::BatchProcessor::run_parallel).
pub trait BatchObserver {
    /// The batch found `total` files and is about to process them.
    fn on_start(&self, _total: usize) {}

    /// `completed` of `total` files are done. Called once per file,
    /// whatever its outcome, with `completed` increasing by one each time.
    fn on_progress(&self, _completed: usize, _total: usize) {}

    /// Converting `path` failed. May be called more than once per file
    /// when several outputs fail to write.
    fn on_error(&self, _path: &Path, _error: &FileError) {}

    /// `path` does not follow a known naming convention and was left alone.
    fn on_skipped(&self, _path: &Path) {}

    /// `path` was converted into `outputs`.
    fn on_converted(&self, _path: &Path, _outputs: &[PathBuf]) {}
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Forwards progress and errors to a pair of closures.
pub struct CallbackObserver<P, E> {
    on_progress: P,
    on_error: E,
}

impl<P, E> CallbackObserver<P, E>
where
    P: Fn(usize, usize),
    E: Fn(&Path, &FileError),
{
    pub fn new(on_progress: P, on_error: E) -> Self {
        Self {
            on_progress,
            on_error,
        }
    }
}

impl<P, E> BatchObserver for CallbackObserver<P, E>
where
    P: Fn(usize, usize),
    E: Fn(&Path, &FileError),
{
    fn on_progress(&self, completed: usize, total: usize) {
        (self.on_progress)(completed, total)
    }

    fn on_error(&self, path: &Path, error: &FileError) {
        (self.on_error)(path, error)
    }
}
