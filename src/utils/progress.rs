//! Progress bar utilities using indicatif
//!
//! Wraps indicatif's `ProgressBar` so the processor can report bytes
//! consumed without caring whether a bar is actually shown.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar wrapper for displaying processing status
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Create a new progress bar with known total
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {percent:>3}% ({bytes}/{total_bytes}) {eta}")
        {
            bar.set_style(style.progress_chars("█░"));
        }
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: IndicatifBar::hidden(),
        }
    }

    /// Update progress
    pub fn update(&self, current: usize) {
        self.bar.set_position(current as u64);
    }

    /// Finish the progress bar
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Drop the bar from the terminal, used when a run aborts
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
