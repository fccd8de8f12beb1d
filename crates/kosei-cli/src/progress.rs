use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ui;

/// Progress bar that is a no-op when progress display is disabled.
#[derive(Clone)]
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
}

fn bar_template() -> &'static str {
    match terminal_columns() {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {percent:>3}% {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {percent:>3}% {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}%",
    }
}

impl Progress {
    /// A percentage bar from 0 to 100.
    #[must_use]
    pub fn percent(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_position(&self, position: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(position);
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }

    /// Mirror a progress channel onto this bar until the channel closes or the
    /// returned task is aborted.
    pub fn follow(&self, mut progress: watch::Receiver<u8>) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            this.set_position(u64::from(*progress.borrow_and_update()));
            while progress.changed().await.is_ok() {
                this.set_position(u64::from(*progress.borrow_and_update()));
            }
        })
    }
}
