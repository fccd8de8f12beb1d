//! Report shapes printed by the commands.

use std::fmt::Write as _;

use kosei_core::{
    ArticleDraft, DraftField, FlattenedIssue, ImageIssue, Issue, SubmitStatus, ValidationErrors,
    flatten_issues,
};
use kosei_review::ReviewOutcome;
use serde::Serialize;

use crate::output::Render;
use crate::output::table::{TableOptions, render_table};
use crate::ui::UiPrefs;

pub const SUCCESS_MESSAGE: &str = "✓ 予稿が正常に送信されました！";
pub const FAILURE_MESSAGE: &str = "✗ 送信中にエラーが発生しました。もう一度お試しください。";

const EMPTY: &str = "—";

/// Original text and the feedback it received.
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub issue_count: usize,
    pub issues: Vec<FlattenedIssue>,
    pub images: Vec<ImageIssue>,
}

impl AnalysisView {
    #[must_use]
    pub fn from_outcome(outcome: &ReviewOutcome) -> Self {
        let issues = outcome.feedback.flattened();
        Self {
            status: Some(SubmitStatus::Success),
            text: Some(draft_text(&outcome.draft)),
            issue_count: issues.len(),
            issues,
            images: outcome.feedback.images.clone(),
        }
    }

    #[must_use]
    pub fn from_parts(text: Option<String>, issues: &[Issue], images: Vec<ImageIssue>) -> Self {
        let issues = flatten_issues(issues);
        Self {
            status: None,
            text,
            issue_count: issues.len(),
            issues,
            images,
        }
    }
}

/// Title, lead and body as one block, skipping an empty lead.
#[must_use]
pub fn draft_text(draft: &ArticleDraft) -> String {
    [&draft.title, &draft.lead_paragraph, &draft.body]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn heading(out: &mut String, title: &str, prefs: UiPrefs) {
    if prefs.color {
        let _ = writeln!(out, "\u{1b}[1m{title}\u{1b}[0m");
    } else {
        let _ = writeln!(out, "{title}");
    }
    let _ = writeln!(out, "{}", "=".repeat(24));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { EMPTY } else { value }
}

impl Render for AnalysisView {
    fn render_human(&self, prefs: UiPrefs) -> String {
        let mut out = String::new();

        if self.status == Some(SubmitStatus::Success) {
            let _ = writeln!(out, "{SUCCESS_MESSAGE}\n");
        }

        if let Some(text) = &self.text {
            heading(&mut out, "校正対象", prefs);
            let _ = writeln!(out, "{text}\n");
        }

        heading(&mut out, &format!("改善点  {} 件", self.issue_count), prefs);
        if self.issues.is_empty() {
            let _ = writeln!(out, "改善点はありません");
        }
        for issue in &self.issues {
            if prefs.color {
                let _ = writeln!(out, "\u{1b}[34m[{}]\u{1b}[0m", issue.label);
            } else {
                let _ = writeln!(out, "[{}]", issue.label);
            }
            if let Some(good) = &issue.good {
                let _ = writeln!(out, "  Good: {good}");
            }
            let _ = writeln!(out, "  検出内容: {}", or_dash(&issue.improvement));
            let _ = writeln!(out, "  提案: {}", or_dash(&issue.suggestion));
        }

        if !self.images.is_empty() {
            out.push('\n');
            heading(&mut out, "画像分析結果", prefs);
            for (idx, image) in self.images.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "[分析画像 {}] {}",
                    idx + 1,
                    image.url.as_deref().unwrap_or(EMPTY)
                );
                if let Some(good) = &image.good {
                    let _ = writeln!(out, "  Good: {good}");
                }
                if let Some(improvement) = &image.improvement {
                    let _ = writeln!(out, "  改善点: {improvement}");
                }
                if let Some(suggestion) = &image.suggestion {
                    let _ = writeln!(out, "  次へのアクション: {suggestion}");
                }
            }
        }

        out.trim_end().to_string()
    }
}

/// Per-field result of validating a draft.
#[derive(Debug, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub fields: Vec<FieldCheck>,
}

impl CheckReport {
    #[must_use]
    pub fn new(draft: &ArticleDraft, errors: Option<&ValidationErrors>) -> Self {
        let fields = DraftField::ALL
            .into_iter()
            .map(|field| FieldCheck {
                field: field.as_str(),
                label: field.label(),
                required: field.is_required(),
                chars: draft.char_count(field),
                limit: field.max_chars(),
                error: errors
                    .and_then(|errors| errors.message_for(field))
                    .map(str::to_string),
            })
            .collect();
        Self {
            valid: errors.is_none(),
            fields,
        }
    }
}

impl Render for CheckReport {
    fn render_human(&self, prefs: UiPrefs) -> String {
        let rows: Vec<Vec<String>> = self
            .fields
            .iter()
            .map(|field| {
                let label = if field.required {
                    format!("{} *", field.label)
                } else {
                    field.label.to_string()
                };
                let chars = field.limit.map_or_else(
                    || field.chars.to_string(),
                    |limit| format!("{} / {limit}", field.chars),
                );
                let status = if field.error.is_some() { "error" } else { "ok" };
                vec![
                    label,
                    chars,
                    status.to_string(),
                    field.error.clone().unwrap_or_default(),
                ]
            })
            .collect();

        render_table(
            &["項目", "文字数", "状態", "メッセージ"],
            &rows,
            TableOptions {
                max_width: prefs.term_width,
                color: prefs.color,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kosei_core::{IssueDetail, ReviewFeedback};
    use pretty_assertions::assert_eq;

    const PLAIN: UiPrefs = UiPrefs {
        color: false,
        progress: false,
        term_width: None,
    };

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "見出し".to_string(),
            lead_paragraph: String::new(),
            body: "本文がここに入ります。十分な長さです。".to_string(),
            main_image_url: "https://example.com/a.jpg".to_string(),
        }
    }

    #[test]
    fn draft_text_skips_empty_lead() {
        assert_eq!(
            draft_text(&draft()),
            "見出し\n\n本文がここに入ります。十分な長さです。"
        );
    }

    #[test]
    fn empty_feedback_says_no_issues() {
        let view = AnalysisView::from_parts(None, &[], Vec::new());
        let out = view.render_human(PLAIN);
        assert!(out.contains("改善点  0 件"));
        assert!(out.contains("改善点はありません"));
        assert!(!out.contains("画像分析結果"));
    }

    #[test]
    fn outcome_renders_text_issues_and_image() {
        let outcome = ReviewOutcome {
            draft: draft(),
            feedback: ReviewFeedback {
                issues: Issue {
                    title: Some(IssueDetail {
                        good: None,
                        improvement: "too long".to_string(),
                        suggestion: String::new(),
                    }),
                    lead: None,
                    body: None,
                },
                images: vec![ImageIssue {
                    url: Some("https://example.com/a.jpg".to_string()),
                    good: Some("sharp".to_string()),
                    improvement: None,
                    suggestion: Some("crop".to_string()),
                }],
            },
        };

        let out = AnalysisView::from_outcome(&outcome).render_human(PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], SUCCESS_MESSAGE);
        assert!(out.contains("校正対象"));
        assert!(out.contains("[タイトル]\n  検出内容: too long\n  提案: —"));
        assert!(out.contains("[分析画像 1] https://example.com/a.jpg"));
        assert!(out.contains("  Good: sharp"));
        assert!(out.contains("  次へのアクション: crop"));
        assert!(!out.contains("改善点: "));
    }

    #[test]
    fn check_report_lists_every_field() {
        let invalid = ArticleDraft {
            body: "短い".to_string(),
            ..draft()
        };
        let errors = invalid.validate().unwrap_err();
        let report = CheckReport::new(&invalid, Some(&errors));

        assert!(!report.valid);
        assert_eq!(report.fields.len(), 4);
        assert_eq!(report.fields[0].chars, 3);
        assert_eq!(report.fields[0].limit, Some(100));
        assert_eq!(
            report.fields[2].error.as_deref(),
            Some("本文は10文字以上で入力してください")
        );

        let out = report.render_human(PLAIN);
        assert!(out.contains("3 / 100"));
        assert!(out.contains("タイトル *"));
        assert!(out.contains("error"));
    }
}
