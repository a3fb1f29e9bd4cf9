//! Cargo-style status lines and spinners, all written to stderr so stdout
//! stays clean for plans, trees and JSON.

use std::io::Write;
use std::time::Duration;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", style.apply_to(label));
}

/// Print an action line with a right-aligned bold green label:
/// `  Installing a@0.0.3`
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Like [`status`] but bold cyan, for summaries rather than actions.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}

/// Spinner for work of unknown length. Hidden when stderr is not a terminal.
///
/// Finish it with [`ProgressBar::finish_and_clear`] once the work is done.
pub fn spinner(message: &str) -> ProgressBar {
    if !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
