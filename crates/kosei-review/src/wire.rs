//! Response shapes of the review service and their mapping onto the
//! feedback model.

use kosei_core::{ImageIssue, Issue, IssueDetail, IssueSet, ReviewFeedback, normalize_issues};
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /review`.
///
/// The lead section may arrive as `lead` or `lead_paragraph`; `lead` wins
/// when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResponseFields")]
pub struct ReviewResponse {
    pub title: IssueDetail,
    pub lead: IssueDetail,
    pub body: IssueDetail,
    pub image: ImageIssue,
}

#[derive(Deserialize)]
struct ResponseFields {
    title: IssueDetail,
    #[serde(default)]
    lead: Option<IssueDetail>,
    #[serde(default)]
    lead_paragraph: Option<IssueDetail>,
    body: IssueDetail,
    image: ImageIssue,
}

impl TryFrom<ResponseFields> for ReviewResponse {
    type Error = &'static str;

    fn try_from(fields: ResponseFields) -> Result<Self, Self::Error> {
        let lead = fields
            .lead
            .or(fields.lead_paragraph)
            .ok_or("missing field `lead`")?;
        Ok(Self {
            title: fields.title,
            lead,
            body: fields.body,
            image: fields.image,
        })
    }
}

impl From<ReviewResponse> for ReviewFeedback {
    fn from(response: ReviewResponse) -> Self {
        Self {
            issues: Issue {
                title: Some(response.title),
                lead: Some(response.lead),
                body: Some(response.body),
            },
            images: vec![response.image],
        }
    }
}

/// A saved feedback document: a full service response, a single `Issue`,
/// or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackDocument {
    Response(ReviewResponse),
    Issues(IssueSet),
}

impl FeedbackDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the text matches none
    /// of the accepted shapes.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        // Structs also deserialize from arrays, so only objects can be a
        // full response.
        if value.is_object() {
            if let Ok(response) = ReviewResponse::deserialize(&value) {
                return Ok(Self::Response(response));
            }
        }
        IssueSet::deserialize(value).map(Self::Issues)
    }

    /// Split the document into normalized text issues and image issues.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Issue>, Vec<ImageIssue>) {
        match self {
            Self::Response(response) => {
                let feedback = ReviewFeedback::from(response);
                (vec![feedback.issues], feedback.images)
            }
            Self::Issues(set) => (normalize_issues(Some(set)), Vec::new()),
        }
    }
}
