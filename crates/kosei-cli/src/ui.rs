use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stderr().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let human = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => human,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && human && !flags.quiet && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // The bar goes to stderr, so JSON on stdout stays clean even when it is on.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => is_tty && !flags.quiet && human,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        term_width: None,
    })
}
