//! Progress indicators for long-running CLI operations

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for the in-flight search request.
///
/// indicatif draws to stderr and stays hidden when stderr is not a terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
