//! Submission status with its state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Status of a review submission.
///
/// ```text
/// idle → submitting → success
///                   → error
/// success | error → idle (next submission)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Submitting],
            Self::Submitting => &[Self::Success, Self::Error],
            Self::Success | Self::Error => &[Self::Idle],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Transition to `next`, rejecting moves the state machine forbids.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if `next` is not reachable
    /// from `self`.
    pub fn transition(self, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_cycle_is_allowed() {
        let status = SubmitStatus::Idle
            .transition(SubmitStatus::Submitting)
            .and_then(|s| s.transition(SubmitStatus::Success))
            .and_then(|s| s.transition(SubmitStatus::Idle))
            .and_then(|s| s.transition(SubmitStatus::Submitting))
            .and_then(|s| s.transition(SubmitStatus::Error))
            .expect("full cycle should be valid");
        assert_eq!(status, SubmitStatus::Error);
    }

    #[test]
    fn cannot_skip_submitting() {
        assert!(!SubmitStatus::Idle.can_transition_to(SubmitStatus::Success));
        assert!(!SubmitStatus::Idle.can_transition_to(SubmitStatus::Error));
    }

    #[test]
    fn cannot_resubmit_while_in_flight() {
        let err = SubmitStatus::Submitting
            .transition(SubmitStatus::Submitting)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(SubmitStatus::Submitting.is_in_flight());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&SubmitStatus::Submitting).unwrap();
        assert_eq!(json, "\"submitting\"");
    }
}
