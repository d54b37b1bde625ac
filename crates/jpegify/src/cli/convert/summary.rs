//! End-of-run summary.

use console::Style;
use jpegify_core::ConversionSummary;

/// Print a formatted summary table to stderr.
pub fn print_summary(summary: &ConversionSummary) {
    let green = Style::new().for_stderr().green();
    let red = Style::new().for_stderr().red();

    eprintln!();
    eprintln!();
    eprintln!("  {}", green.apply_to("Conversion complete!"));
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", summary.succeeded);
    if summary.failed > 0 {
        eprintln!("    Failed:       {:>8}", red.apply_to(summary.failed));
    } else {
        eprintln!("    Failed:       {:>8}", summary.failed);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", summary.total);
    eprintln!("    Workers:      {:>8}", summary.workers);
    eprintln!("    Duration:     {:>7.1}s", summary.elapsed.as_secs_f64());
    eprintln!("    Rate:         {:>7.1} img/sec", summary.rate());
    eprintln!("  ====================================");
}
