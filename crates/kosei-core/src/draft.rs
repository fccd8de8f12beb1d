//! The article draft and its validation schema.
//!
//! Constraints are declarative: each field carries an ordered list of checks
//! and validation reports the first failing check per field. Lengths are
//! counted in characters, not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{FieldError, ValidationErrors};

pub const TITLE_MAX_CHARS: usize = 100;
pub const LEAD_MAX_CHARS: usize = 200;
pub const BODY_MIN_CHARS: usize = 10;

/// User-authored article fields pending submission.
///
/// Serialized with the exact field names the review service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lead_paragraph: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub main_image_url: String,
}

/// The four draft fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    LeadParagraph,
    Body,
    MainImageUrl,
}

impl DraftField {
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::LeadParagraph,
        Self::Body,
        Self::MainImageUrl,
    ];

    /// Wire name used in the request body.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::LeadParagraph => "lead_paragraph",
            Self::Body => "body",
            Self::MainImageUrl => "main_image_url",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "タイトル",
            Self::LeadParagraph => "リード文",
            Self::Body => "本文",
            Self::MainImageUrl => "メイン画像URL",
        }
    }

    /// Character limit shown next to the field, if it has one.
    #[must_use]
    pub const fn max_chars(self) -> Option<usize> {
        match self {
            Self::Title => Some(TITLE_MAX_CHARS),
            Self::LeadParagraph => Some(LEAD_MAX_CHARS),
            Self::Body | Self::MainImageUrl => None,
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::LeadParagraph)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declarative constraint on a string field.
enum Check {
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    Url(&'static str),
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Self::MinChars(min, _) => value.chars().count() >= *min,
            Self::MaxChars(max, _) => value.chars().count() <= *max,
            Self::Url(_) => url::Url::parse(value).is_ok(),
        }
    }

    const fn message(&self) -> &'static str {
        match self {
            Self::MinChars(_, message) | Self::MaxChars(_, message) | Self::Url(message) => {
                *message
            }
        }
    }
}

const TITLE_CHECKS: &[Check] = &[
    Check::MinChars(1, "タイトルは必須です"),
    Check::MaxChars(TITLE_MAX_CHARS, "タイトルは100文字以内で入力してください"),
];

const LEAD_CHECKS: &[Check] = &[Check::MaxChars(
    LEAD_MAX_CHARS,
    "要約は200文字以内で入力してください",
)];

const BODY_CHECKS: &[Check] = &[
    Check::MinChars(1, "本文は必須です"),
    Check::MinChars(BODY_MIN_CHARS, "本文は10文字以上で入力してください"),
];

const IMAGE_URL_CHECKS: &[Check] = &[Check::Url("正しいURLを入力してください")];

const fn schema(field: DraftField) -> &'static [Check] {
    match field {
        DraftField::Title => TITLE_CHECKS,
        DraftField::LeadParagraph => LEAD_CHECKS,
        DraftField::Body => BODY_CHECKS,
        DraftField::MainImageUrl => IMAGE_URL_CHECKS,
    }
}

impl ArticleDraft {
    #[must_use]
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::LeadParagraph => &self.lead_paragraph,
            DraftField::Body => &self.body,
            DraftField::MainImageUrl => &self.main_image_url,
        }
    }

    #[must_use]
    pub fn char_count(&self, field: DraftField) -> usize {
        self.value(field).chars().count()
    }

    /// Check every field against the schema.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] holding the first failing check of each
    /// invalid field, in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = DraftField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.value(field);
                schema(field)
                    .iter()
                    .find(|check| !check.passes(value))
                    .map(|check| FieldError {
                        field,
                        message: check.message().to_string(),
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}
