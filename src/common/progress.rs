use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::prelude::*;

pub fn create_spinner(message: String) -> ProgressBar {
    // JSON consumers get no spinner frames on the terminal
    if matches!(get_output_format(), OutputFormat::Json) {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠉⠙⠚⠒⠂⠂⠒⠲⠴⠤⠄⠄⠤⠠⠠⠤⠦⠖⠒⠐⠐⠒⠓⠋⠉");
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Run `f` while a spinner shows `message`. The spinner line is cleared
/// afterwards regardless of the outcome.
pub fn with_spinner<T>(message: impl Into<String>, f: impl FnOnce() -> T) -> T {
    let pb = create_spinner(message.into());
    let out = f();
    pb.finish_and_clear();
    out
}
