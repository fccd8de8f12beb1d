//! Cross-cutting error types for kosei.
//!
//! Domain-specific errors (`ConfigError`, `ReviewError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use std::fmt;

use thiserror::Error;

use crate::draft::DraftField;

/// Errors that can be raised by any kosei crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status transition was attempted that is not allowed.
    #[error("Invalid status transition: from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// The draft failed its schema checks.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// A single failed constraint on one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// All field errors found in one validation pass, in field declaration order.
///
/// Never empty: [`ArticleDraft::validate`](crate::ArticleDraft::validate)
/// only builds one when at least one field failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if that field failed.
    #[must_use]
    pub fn message_for(&self, field: DraftField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
