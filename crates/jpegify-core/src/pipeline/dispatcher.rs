//! Worker-pool fan-out for batch conversion.
//!
//! Every file is converted on a blocking worker thread. A semaphore sized to
//! the requested worker count admits at most that many conversions at once.
//! Completions feed the shared [`ProgressCounter`] in whatever order they
//! finish; outputs are keyed by input name so order does not matter.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

use crate::error::{ConvertError, JpegifyError, Result};
use crate::types::{ConversionOutcome, ConversionSummary};

use super::converter::Converter;
use super::discovery::DiscoveredFile;
use super::progress::{ProgressCounter, ProgressReporter};

/// Number of CPU cores available to this process (at least 1).
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Check a requested worker count against `1..=max`.
pub fn validate_workers(requested: usize, max: usize) -> Result<usize> {
    if (1..=max).contains(&requested) {
        Ok(requested)
    } else {
        Err(JpegifyError::InvalidWorkers { requested, max })
    }
}

/// Per-file conversion run on a worker thread.
type ConvertFn = fn(&Converter, &str) -> ConversionOutcome;

/// Fans conversions out across a fixed number of workers.
pub struct Dispatcher {
    converter: Arc<Converter>,
    workers: usize,
    convert: ConvertFn,
}

impl Dispatcher {
    /// Create a dispatcher. `workers` is clamped to at least 1.
    pub fn new(converter: Converter, workers: usize) -> Self {
        Self {
            converter: Arc::new(converter),
            workers: workers.max(1),
            convert: Converter::convert_outcome,
        }
    }

    #[cfg(test)]
    fn with_convert_fn(mut self, convert: ConvertFn) -> Self {
        self.convert = convert;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Convert every file, reporting each completion to `reporter`.
    ///
    /// Per-file failures (including a panicking worker) are counted, never
    /// propagated. Outcomes are returned in input order.
    pub async fn run<R>(
        &self,
        files: &[DiscoveredFile],
        reporter: R,
    ) -> (Vec<ConversionOutcome>, ConversionSummary)
    where
        R: ProgressReporter + 'static,
    {
        let start = Instant::now();
        let total = files.len();
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let counter = Arc::new(ProgressCounter::new(total, reporter));
        counter.reporter().on_start(total);

        tracing::debug!("Dispatching {} file(s) across {} worker(s)", total, self.workers);

        let mut handles = Vec::with_capacity(total);
        for file in files {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                tracing::warn!("Worker semaphore closed unexpectedly; stopping dispatch");
                break;
            };

            let converter = Arc::clone(&self.converter);
            let counter = Arc::clone(&counter);
            let file_name = file.file_name.clone();
            let convert = self.convert;

            let handle = tokio::task::spawn_blocking(move || {
                let outcome = convert(&converter, &file_name);
                drop(permit);
                counter.advance();
                outcome
            });
            handles.push((file, handle));
        }

        let mut outcomes = Vec::with_capacity(total);
        for (file, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    // The panicking worker never reached its own advance.
                    let error = ConvertError::Worker {
                        path: file.path.clone(),
                        message: e.to_string(),
                    };
                    tracing::debug!("Failed to convert {}: {}", file.file_name, error);
                    counter.advance();
                    outcomes.push(self.converter.failed(&file.file_name));
                }
            }
        }

        // Files never dispatched still count toward the total, as failures.
        for file in files.iter().skip(outcomes.len()) {
            counter.advance();
            outcomes.push(self.converter.failed(&file.file_name));
        }

        counter.reporter().on_finish();

        let summary = ConversionSummary::from_outcomes(&outcomes, self.workers, start.elapsed());
        tracing::debug!(
            "Batch finished: {} succeeded, {} failed in {:?}",
            summary.succeeded,
            summary.failed,
            summary.elapsed
        );
        (outcomes, summary)
    }
}
