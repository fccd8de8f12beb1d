//! # kosei-review
//!
//! Client side of the article review service.
//!
//! - [`ReviewClient`] posts a draft as JSON and decodes the feedback.
//! - [`SubmissionController`] runs one submission at a time: validation,
//!   the request, a simulated progress counter, and the status flag.
//! - [`FeedbackDocument`] reads saved feedback in any of its accepted shapes.

mod client;
mod controller;
mod error;
mod http;
mod ticker;
mod wire;

pub use client::{ReviewClient, ReviewService};
pub use controller::{ReviewOutcome, SubmissionController};
pub use error::{ReviewError, SubmitError};
pub use ticker::{ProgressSettings, ProgressTicker, advance};
pub use wire::{FeedbackDocument, ReviewResponse};
