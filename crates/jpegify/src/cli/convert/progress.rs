//! Single-line progress bar for a conversion batch.

use indicatif::{ProgressBar, ProgressStyle};
use jpegify_core::ProgressReporter;
use std::time::Instant;

const TEMPLATE: &str = "[{bar:30.cyan/blue}] {percent:>3}% ({pos}/{len}) {msg}";

/// Renders dispatcher progress with indicatif.
pub struct BarReporter {
    bar: ProgressBar,
    start: Instant,
}

impl BarReporter {
    pub fn new(total: u64) -> Self {
        Self::with_bar(ProgressBar::new(total))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(bar_style());
        Self {
            bar,
            start: Instant::now(),
        }
    }
}

impl ProgressReporter for BarReporter {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.reset_elapsed();
    }

    fn on_advance(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
        let elapsed = self.start.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.bar
                .set_message(format!("{:.1} img/sec", completed as f64 / elapsed));
        }
    }

    fn on_finish(&self) {
        self.bar.finish();
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        assert!(ProgressStyle::default_bar().template(TEMPLATE).is_ok());
    }

    #[test]
    fn advance_moves_bar_to_completed_count() {
        let reporter = BarReporter::with_bar(ProgressBar::hidden());
        reporter.on_start(5);
        reporter.on_advance(3, 5);
        assert_eq!(reporter.bar.length(), Some(5));
        assert_eq!(reporter.bar.position(), 3);

        reporter.on_advance(5, 5);
        reporter.on_finish();
        assert!(reporter.bar.is_finished());
    }
}
