use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a draft for review and print the feedback.
    Review(DraftArgs),
    /// Validate a draft without sending it.
    Check(DraftArgs),
    /// Render saved feedback next to the original text.
    Show(ShowArgs),
}

/// Draft fields, given directly or loaded from a JSON file.
///
/// Flags override the matching fields of `--draft`.
#[derive(Clone, Debug, Default, Args)]
pub struct DraftArgs {
    /// JSON file with `title`, `lead_paragraph`, `body`, `main_image_url`.
    #[arg(long, value_name = "FILE")]
    pub draft: Option<PathBuf>,
    /// Article title (required, up to 100 characters).
    #[arg(long)]
    pub title: Option<String>,
    /// Lead paragraph (optional, up to 200 characters).
    #[arg(long)]
    pub lead: Option<String>,
    /// Article body (required, at least 10 characters).
    #[arg(long)]
    pub body: Option<String>,
    /// Read the body from a text file instead of `--body`.
    #[arg(long, value_name = "FILE", conflicts_with = "body")]
    pub body_file: Option<PathBuf>,
    /// URL of the main image.
    #[arg(long = "image-url")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Saved feedback: a review response, an issue object, or a list of issues.
    pub feedback: PathBuf,
    /// Original text to show alongside the feedback.
    #[arg(long, value_name = "FILE")]
    pub text: Option<PathBuf>,
}
