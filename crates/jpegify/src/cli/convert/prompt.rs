//! Console prompts: worker count and the final "press Enter" pause.

use console::Term;
use dialoguer::Input;
use jpegify_core::validate_workers;

use crate::cli::handle_interrupt;
use crate::cli::theme::jpegify_theme;

/// Whether a person is at the console (stdin and stderr are terminals).
pub fn is_attended() -> bool {
    console::user_attended_stderr() && stdin_is_term()
}

fn stdin_is_term() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

/// Ask for a worker count in `1..=max`.
///
/// Non-numeric and out-of-range answers are rejected and asked again.
/// Returns `Ok(None)` if the operator interrupts the prompt.
pub fn prompt_workers(max: usize) -> anyhow::Result<Option<usize>> {
    let theme = jpegify_theme();
    handle_interrupt(
        Input::<usize>::with_theme(&theme)
            .with_prompt(format!("Number of workers (1-{max})"))
            .default(max)
            .validate_with(move |n: &usize| check_workers(*n, max))
            .interact_text(),
    )
}

/// Validation message for the worker prompt.
fn check_workers(n: usize, max: usize) -> Result<(), String> {
    validate_workers(n, max).map(|_| ()).map_err(|e| e.to_string())
}

/// Block until the operator presses Enter.
pub fn wait_for_enter() -> anyhow::Result<()> {
    let term = Term::stderr();
    term.write_line("")?;
    term.write_str("Press Enter to exit...")?;
    match term.read_line() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(()),
        Err(e) => Err(e.into()),
    }
}
