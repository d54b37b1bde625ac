//! Progress reporting for batch conversion.

use std::sync::{Arc, Mutex};

/// Receives progress events from the dispatcher.
///
/// The CLI renders these with a progress bar; all methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn on_start(&self, _total: usize) {}
    fn on_advance(&self, _completed: usize, _total: usize) {}
    fn on_finish(&self) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

impl<R: ProgressReporter + ?Sized> ProgressReporter for Arc<R> {
    fn on_start(&self, total: usize) {
        (**self).on_start(total)
    }
    fn on_advance(&self, completed: usize, total: usize) {
        (**self).on_advance(completed, total)
    }
    fn on_finish(&self) {
        (**self).on_finish()
    }
}

/// Completion counter shared by all workers.
///
/// Each `advance` increments under the lock and notifies the reporter while
/// still holding it, so redraws happen one at a time and in count order.
pub struct ProgressCounter<R: ProgressReporter> {
    completed: Mutex<usize>,
    total: usize,
    reporter: R,
}

impl<R: ProgressReporter> ProgressCounter<R> {
    pub fn new(total: usize, reporter: R) -> Self {
        Self {
            completed: Mutex::new(0),
            total,
            reporter,
        }
    }

    /// Record one finished file and return the new completed count.
    pub fn advance(&self) -> usize {
        // A poisoned lock only means a reporter panicked mid-redraw; the count is still valid.
        let mut completed = self
            .completed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *completed += 1;
        self.reporter.on_advance(*completed, self.total);
        *completed
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
