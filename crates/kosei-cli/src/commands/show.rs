use std::path::Path;

use anyhow::Context;
use kosei_review::FeedbackDocument;

use crate::cli::{GlobalFlags, ShowArgs};
use crate::output::output;
use crate::output::report::AnalysisView;

/// Handle `kosei show`.
pub fn handle(args: &ShowArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = load_view(&args.feedback, args.text.as_deref())?;
    output(&view, flags.format)
}

fn load_view(feedback: &Path, text: Option<&Path>) -> anyhow::Result<AnalysisView> {
    let raw = std::fs::read_to_string(feedback)
        .with_context(|| format!("failed to read feedback file {}", feedback.display()))?;
    let document = FeedbackDocument::from_json(&raw)
        .with_context(|| format!("unrecognized feedback document {}", feedback.display()))?;

    let text = text
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read text file {}", path.display()))
        })
        .transpose()?;

    let (issues, images) = document.into_parts();
    Ok(AnalysisView::from_parts(text, &issues, images))
}
