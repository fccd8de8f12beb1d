use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui::{self, UiPrefs};

pub mod report;
pub mod table;

/// Human-readable rendering used by the `table` format.
pub trait Render {
    fn render_human(&self, prefs: UiPrefs) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Render>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(value.render_human(ui::prefs())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Render>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
