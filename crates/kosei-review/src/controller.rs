//! Submission lifecycle: validate, post, simulate progress, keep the result.
//!
//! ```text
//! idle → submitting → success
//!                   → error
//! ```
//!
//! Status and progress are published on `watch` channels so a renderer can
//! follow them without holding the controller. `submit` takes `&mut self`,
//! which rules out overlapping submissions on one controller.

use std::sync::Arc;

use kosei_core::{ArticleDraft, ReviewFeedback, SubmitStatus};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::ReviewService;
use crate::error::SubmitError;
use crate::ticker::{ProgressSettings, ProgressTicker};

/// Progress shown once the response has arrived but before it is applied.
const RESPONSE_RECEIVED: u8 = 95;
const COMPLETE: u8 = 100;

/// The draft that was reviewed and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub draft: ArticleDraft,
    pub feedback: ReviewFeedback,
}

pub struct SubmissionController<S> {
    service: S,
    settings: ProgressSettings,
    status: watch::Sender<SubmitStatus>,
    progress: Arc<watch::Sender<u8>>,
    ticker: ProgressTicker,
    reset: Option<JoinHandle<()>>,
    outcome: Option<ReviewOutcome>,
}

impl<S: ReviewService> SubmissionController<S> {
    #[must_use]
    pub fn new(service: S, settings: ProgressSettings) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);
        let (progress, _) = watch::channel(0);
        Self {
            service,
            settings,
            status,
            progress: Arc::new(progress),
            ticker: ProgressTicker::new(),
            reset: None,
            outcome: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        *self.status.borrow()
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    #[must_use]
    pub fn subscribe_status(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Result of the last successful submission, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<&ReviewOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Validate `draft`, send it for review, and keep the feedback.
    ///
    /// Must be called from within a tokio runtime. If the returned future is
    /// dropped before the service answers, the cycle ends as `error`: the
    /// ticker stops and the progress reset is scheduled as usual.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] if the draft fails validation. Nothing is
    ///   sent and the status is left as it was.
    /// - [`SubmitError::Review`] if the request fails for any reason. The
    ///   status becomes `error` and the previous outcome is kept.
    pub async fn submit(&mut self, draft: ArticleDraft) -> Result<&ReviewOutcome, SubmitError> {
        draft.validate()?;

        let mut cycle = Cycle::begin(
            &mut self.ticker,
            &self.status,
            &self.progress,
            &mut self.reset,
            self.settings,
        );
        let result = self.service.review(&draft).await;
        cycle.stop_ticker();

        match result {
            Ok(response) => {
                self.progress.send_replace(RESPONSE_RECEIVED);
                let feedback = ReviewFeedback::from(response);
                self.progress.send_replace(COMPLETE);
                set_status(&self.status, SubmitStatus::Success);
                drop(cycle);
                Ok(self.outcome.insert(ReviewOutcome { draft, feedback }))
            }
            Err(error) => {
                tracing::error!(%error, "review submission failed");
                set_status(&self.status, SubmitStatus::Error);
                Err(SubmitError::Review(error))
            }
        }
    }
}

/// One submission cycle in progress.
///
/// Dropping it ends the cycle: the ticker stops, a status still at
/// `submitting` becomes `error`, and the delayed progress reset is scheduled.
struct Cycle<'a> {
    ticker: &'a mut ProgressTicker,
    status: &'a watch::Sender<SubmitStatus>,
    progress: &'a Arc<watch::Sender<u8>>,
    reset: &'a mut Option<JoinHandle<()>>,
    settings: ProgressSettings,
}

impl<'a> Cycle<'a> {
    fn begin(
        ticker: &'a mut ProgressTicker,
        status: &'a watch::Sender<SubmitStatus>,
        progress: &'a Arc<watch::Sender<u8>>,
        reset: &'a mut Option<JoinHandle<()>>,
        settings: ProgressSettings,
    ) -> Self {
        cancel_reset(reset);
        if *status.borrow() != SubmitStatus::Idle {
            set_status(status, SubmitStatus::Idle);
        }
        set_status(status, SubmitStatus::Submitting);
        progress.send_replace(0);
        ticker.start(Arc::clone(progress), settings);
        Self {
            ticker,
            status,
            progress,
            reset,
            settings,
        }
    }

    fn stop_ticker(&mut self) {
        self.ticker.stop();
    }
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        self.ticker.stop();
        if self.status.borrow().is_in_flight() {
            tracing::warn!("submission dropped before the service answered");
            set_status(self.status, SubmitStatus::Error);
        }
        schedule_reset(self.reset, self.progress, self.settings);
    }
}

fn set_status(status: &watch::Sender<SubmitStatus>, next: SubmitStatus) {
    let current = *status.borrow();
    match current.transition(next) {
        Ok(next) => {
            tracing::info!(from = %current, to = %next, "submission status changed");
            status.send_replace(next);
        }
        Err(error) => tracing::warn!(%error, "ignoring status transition"),
    }
}

fn cancel_reset(reset: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = reset.take() {
        handle.abort();
    }
}

/// Drop progress back to 0 after the cosmetic delay, replacing any pending
/// reset.
fn schedule_reset(
    reset: &mut Option<JoinHandle<()>>,
    progress: &Arc<watch::Sender<u8>>,
    settings: ProgressSettings,
) {
    cancel_reset(reset);
    let progress = Arc::clone(progress);
    *reset = Some(tokio::spawn(async move {
        tokio::time::sleep(settings.reset_delay).await;
        progress.send_replace(0);
    }));
}

impl<S> Drop for SubmissionController<S> {
    fn drop(&mut self) {
        cancel_reset(&mut self.reset);
    }
}
