//! Normalization and flattening of section-keyed feedback into an ordered,
//! labeled list for display.

use serde::{Deserialize, Serialize};

use crate::feedback::{Issue, IssueDetail, IssueSet, ReviewFeedback, Section};

/// One section's feedback tagged with its section label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedIssue {
    #[serde(rename = "type")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
    pub improvement: String,
    pub suggestion: String,
}

impl FlattenedIssue {
    fn new(section: Section, detail: &IssueDetail) -> Self {
        Self {
            label: section.label().to_string(),
            good: detail.good.clone(),
            improvement: detail.improvement.clone(),
            suggestion: detail.suggestion.clone(),
        }
    }
}

/// Resolve optional single-or-many feedback into a list.
#[must_use]
pub fn normalize_issues(issues: Option<IssueSet>) -> Vec<Issue> {
    match issues {
        None => Vec::new(),
        Some(IssueSet::Single(issue)) => vec![issue],
        Some(IssueSet::Many(issues)) => issues,
    }
}

/// Flatten issues in input order, emitting title, lead, then body for each
/// issue and skipping absent sections.
#[must_use]
pub fn flatten_issues(issues: &[Issue]) -> Vec<FlattenedIssue> {
    issues.iter().flat_map(Issue::flatten).collect()
}

impl Issue {
    #[must_use]
    pub fn flatten(&self) -> Vec<FlattenedIssue> {
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                self.section(section)
                    .map(|detail| FlattenedIssue::new(section, detail))
            })
            .collect()
    }
}

impl ReviewFeedback {
    #[must_use]
    pub fn flattened(&self) -> Vec<FlattenedIssue> {
        self.issues.flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detail(improvement: &str, suggestion: &str) -> IssueDetail {
        IssueDetail {
            good: None,
            improvement: improvement.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    #[test]
    fn normalize_absent_is_empty() {
        assert!(normalize_issues(None).is_empty());
    }

    #[test]
    fn normalize_single_wraps_in_list() {
        let issue = Issue {
            title: Some(detail("a", "b")),
            ..Issue::default()
        };
        assert_eq!(
            normalize_issues(Some(IssueSet::Single(issue.clone()))),
            vec![issue]
        );
    }

    #[test]
    fn normalize_list_is_unchanged() {
        let issues = vec![
            Issue {
                body: Some(detail("x", "y")),
                ..Issue::default()
            },
            Issue::default(),
        ];
        assert_eq!(normalize_issues(Some(issues.clone().into())), issues);
    }

    #[test]
    fn flatten_skips_absent_lead() {
        let issue = Issue {
            title: Some(detail("too long", "shorten")),
            lead: None,
            body: Some(detail("vague", "add detail")),
        };

        let flattened = flatten_issues(&[issue]);
        assert_eq!(
            flattened,
            vec![
                FlattenedIssue {
                    label: "タイトル".to_string(),
                    good: None,
                    improvement: "too long".to_string(),
                    suggestion: "shorten".to_string(),
                },
                FlattenedIssue {
                    label: "本文".to_string(),
                    good: None,
                    improvement: "vague".to_string(),
                    suggestion: "add detail".to_string(),
                },
            ]
        );
    }

    #[test]
    fn flatten_orders_by_issue_then_section() {
        let first = Issue {
            body: Some(detail("b1", "")),
            lead: Some(detail("l1", "")),
            title: None,
        };
        let second = Issue {
            title: Some(detail("t2", "")),
            ..Issue::default()
        };

        let improvements: Vec<String> = flatten_issues(&[first, second])
            .into_iter()
            .map(|issue| issue.improvement)
            .collect();
        assert_eq!(improvements, vec!["l1", "b1", "t2"]);
    }

    #[test]
    fn flatten_keeps_good_note() {
        let issue = Issue {
            lead: Some(IssueDetail {
                good: Some("読みやすい".to_string()),
                ..detail("", "")
            }),
            ..Issue::default()
        };
        let flattened = issue.flatten();
        assert_eq!(flattened.len(), 1);
        assert_eq!(flattened[0].label, "リード文");
        assert_eq!(flattened[0].good.as_deref(), Some("読みやすい"));
    }

    #[test]
    fn flattened_serializes_label_as_type() {
        let issue = Issue {
            title: Some(detail("a", "b")),
            ..Issue::default()
        };
        let json = serde_json::to_value(issue.flatten()).unwrap();
        assert_eq!(json[0]["type"], "タイトル");
    }
}
