//! Lightweight progress reporting for the ask pipeline.
//!
//! Servers and headless runs get `NoopProgress`; interactive terminals get
//! an indicatif spinner. [`auto`] picks the right one at runtime.

use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Minimal progress interface used inside the ask() pipeline.
pub trait Progress: Send + Sync {
    /// Set known total steps (optional).
    fn set_total(&self, _n: u64) {}
    /// Advance by one step and show a short message.
    fn step(&self, _msg: &str) {}
    /// Replace current message without advancing.
    fn message(&self, _msg: &str) {}
    /// Finish the UI.
    fn finish(&self, _msg: &str) {}
}

/// No-op reporter for servers/headless runs.
#[derive(Default, Clone, Copy)]
pub struct NoopProgress;
impl Progress for NoopProgress {}

/// Indicatif-based spinner.
pub struct IndicatifProgress {
    pb: ProgressBar,
}

impl IndicatifProgress {
    /// Spinner (unknown total).
    pub fn spinner() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap()
                .tick_chars("-\\|/ "),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb }
    }
}

impl Progress for IndicatifProgress {
    fn set_total(&self, n: u64) {
        self.pb.set_length(n);
    }
    fn step(&self, msg: &str) {
        self.pb.inc(1);
        self.pb.set_message(msg.to_string());
    }
    fn message(&self, msg: &str) {
        self.pb.set_message(msg.to_string());
    }
    fn finish(&self, msg: &str) {
        self.pb.finish_with_message(msg.to_string());
    }
}

/// Spinner when stdout is a terminal, no-op otherwise.
pub fn auto() -> Box<dyn Progress> {
    if std::io::stdout().is_terminal() {
        Box::new(IndicatifProgress::spinner())
    } else {
        Box::new(NoopProgress)
    }
}
