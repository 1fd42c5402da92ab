use std::io::{self, Write};
use terminal_size::{terminal_size, Width};
use crate::config::constants::PROGRESS_BAR_FALLBACK_WIDTH;

/// Redraws a single-line progress bar with the current phase caption on
/// stderr while a scan is running.
pub struct ScanProgressLogger {
    bar_width: usize,
}

impl ScanProgressLogger {
    pub fn new() -> Self {
        let bar_width = match terminal_size() {
            Some((Width(w), _)) => (w as usize / 2).clamp(10, 60),
            None => PROGRESS_BAR_FALLBACK_WIDTH,
        };

        Self { bar_width }
    }

    /// Renders the current progress and phase caption in place.
    pub fn render(&self, progress: f64, phase: &str) {
        let filled = ((progress / 100.0) * self.bar_width as f64) as usize;
        let empty = self.bar_width.saturating_sub(filled);

        eprint!(
            "\r\x1b[K[{}{}] {:>3.0}% {}",
            "█".repeat(filled),
            "░".repeat(empty),
            progress,
            phase
        );
        let _ = io::stderr().flush();
    }

    /// Clears the progress line once the scan is done.
    pub fn finish(&self) {
        eprint!("\r\x1b[K");
        let _ = io::stderr().flush();
    }
}

impl Default for ScanProgressLogger {
    fn default() -> Self {
        Self::new()
    }
}
