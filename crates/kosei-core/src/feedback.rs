//! Review feedback received for a submitted draft.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one article section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
    #[serde(default)]
    pub improvement: String,
    #[serde(default)]
    pub suggestion: String,
}

/// Section-keyed feedback. Absent sections carry no feedback.
///
/// `lead_paragraph` is read as the lead section. When both keys are present,
/// `lead` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IssueFields")]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<IssueDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<IssueDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<IssueDetail>,
}

#[derive(Deserialize)]
struct IssueFields {
    #[serde(default)]
    title: Option<IssueDetail>,
    #[serde(default)]
    lead: Option<IssueDetail>,
    #[serde(default)]
    lead_paragraph: Option<IssueDetail>,
    #[serde(default)]
    body: Option<IssueDetail>,
}

impl From<IssueFields> for Issue {
    fn from(fields: IssueFields) -> Self {
        Self {
            title: fields.title,
            lead: fields.lead.or(fields.lead_paragraph),
            body: fields.body,
        }
    }
}

impl Issue {
    #[must_use]
    pub const fn section(&self, section: Section) -> Option<&IssueDetail> {
        match section {
            Section::Title => self.title.as_ref(),
            Section::Lead => self.lead.as_ref(),
            Section::Body => self.body.as_ref(),
        }
    }

    /// Number of sections that carry feedback.
    #[must_use]
    pub fn present_sections(&self) -> usize {
        Section::ALL
            .into_iter()
            .filter(|section| self.section(*section).is_some())
            .count()
    }
}

/// Feedback for the submitted main image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Article sections that can receive feedback, in display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Title,
    Lead,
    Body,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Title, Self::Lead, Self::Body];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "タイトル",
            Self::Lead => "リード文",
            Self::Body => "本文",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Lead => "lead",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feedback that arrives either as one [`Issue`] or as a list of them.
///
/// Deserializes from a JSON object or a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueSet {
    Many(Vec<Issue>),
    Single(Issue),
}

impl From<Issue> for IssueSet {
    fn from(issue: Issue) -> Self {
        Self::Single(issue)
    }
}

impl From<Vec<Issue>> for IssueSet {
    fn from(issues: Vec<Issue>) -> Self {
        Self::Many(issues)
    }
}

/// Everything kept from one successful review: the text issues and the
/// image issues. Replaced wholesale by the next successful review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFeedback {
    pub issues: Issue,
    #[serde(default)]
    pub images: Vec<ImageIssue>,
}
