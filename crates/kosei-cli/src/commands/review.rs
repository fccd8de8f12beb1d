use anyhow::bail;
use kosei_config::KoseiConfig;
use kosei_review::{ProgressSettings, ReviewClient, SubmissionController, SubmitError};

use crate::cli::{DraftArgs, GlobalFlags};
use crate::commands::draft_input::build_draft;
use crate::output::output;
use crate::output::report::{AnalysisView, CheckReport, FAILURE_MESSAGE};
use crate::progress::Progress;

/// Handle `kosei review`.
pub async fn handle(
    args: &DraftArgs,
    config: &KoseiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = build_draft(args)?;
    let client = ReviewClient::from_config(&config.service)?;
    tracing::debug!(endpoint = %client.endpoint(), "submitting draft");

    let mut controller =
        SubmissionController::new(client, ProgressSettings::from(&config.progress));

    let bar = Progress::percent("送信中...");
    let follower = bar.follow(controller.subscribe_progress());
    let result = controller.submit(draft.clone()).await;
    follower.abort();

    match result {
        Ok(outcome) => {
            bar.set_position(100);
            bar.finish_clear();
            output(&AnalysisView::from_outcome(outcome), flags.format)
        }
        Err(SubmitError::Invalid(errors)) => {
            bar.finish_clear();
            output(&CheckReport::new(&draft, Some(&errors)), flags.format)?;
            bail!("draft has {} invalid field(s)", errors.len())
        }
        Err(error) => {
            bar.finish_err("送信失敗");
            eprintln!("{FAILURE_MESSAGE}");
            Err(error.into())
        }
    }
}
