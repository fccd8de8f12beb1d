use std::path::Path;

use anyhow::Context;
use kosei_core::ArticleDraft;

use crate::cli::DraftArgs;

/// Assemble a draft from `--draft`, then apply individual field flags on top.
pub fn build_draft(args: &DraftArgs) -> anyhow::Result<ArticleDraft> {
    let mut draft = match &args.draft {
        Some(path) => read_draft_file(path)?,
        None => ArticleDraft::default(),
    };

    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(lead) = &args.lead {
        draft.lead_paragraph.clone_from(lead);
    }
    if let Some(body) = &args.body {
        draft.body.clone_from(body);
    }
    if let Some(path) = &args.body_file {
        draft.body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body file {}", path.display()))?;
    }
    if let Some(url) = &args.image_url {
        draft.main_image_url.clone_from(url);
    }

    Ok(draft)
}

fn read_draft_file(path: &Path) -> anyhow::Result<ArticleDraft> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse draft file {}", path.display()))
}
