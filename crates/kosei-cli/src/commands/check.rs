use anyhow::bail;

use crate::cli::{DraftArgs, GlobalFlags};
use crate::commands::draft_input::build_draft;
use crate::output::output;
use crate::output::report::CheckReport;

/// Handle `kosei check`.
pub fn handle(args: &DraftArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = build_draft(args)?;
    let errors = draft.validate().err();
    let report = CheckReport::new(&draft, errors.as_ref());
    output(&report, flags.format)?;

    if let Some(errors) = errors {
        bail!("draft has {} invalid field(s)", errors.len());
    }
    Ok(())
}
