//! # kosei-core
//!
//! Core types and pure transforms for kosei.
//!
//! This crate provides the foundational types shared across all kosei crates:
//! - The article draft and its declarative validation schema
//! - Review feedback types (per-section issues and image issues)
//! - Issue normalization and flattening into a render-ready list
//! - The submission status enum with state machine transitions
//! - Cross-cutting error types

pub mod draft;
pub mod errors;
pub mod feedback;
pub mod flatten;
pub mod status;

pub use draft::{ArticleDraft, DraftField};
pub use errors::{CoreError, FieldError, ValidationErrors};
pub use feedback::{ImageIssue, Issue, IssueDetail, IssueSet, ReviewFeedback, Section};
pub use flatten::{FlattenedIssue, flatten_issues, normalize_issues};
pub use status::SubmitStatus;
