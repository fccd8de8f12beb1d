//! HTTP client for the review service.

use std::future::Future;

use kosei_config::ServiceConfig;
use kosei_core::ArticleDraft;

use crate::error::ReviewError;
use crate::http::check_response;
use crate::wire::ReviewResponse;

/// Anything that can turn a draft into review feedback.
///
/// [`ReviewClient`] is the HTTP implementation; the submission controller is
/// generic over this trait.
pub trait ReviewService {
    fn review(
        &self,
        draft: &ArticleDraft,
    ) -> impl Future<Output = Result<ReviewResponse, ReviewError>> + Send;
}

/// Posts drafts to the review endpoint as JSON.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ReviewClient {
    /// Create a client for `endpoint`.
    ///
    /// No request timeout is set: a review runs until the service answers or
    /// the transport fails.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidEndpoint`] if `endpoint` does not parse,
    /// or [`ReviewError::Http`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str) -> Result<Self, ReviewError> {
        let endpoint =
            reqwest::Url::parse(endpoint).map_err(|e| ReviewError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("kosei/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ReviewError> {
        Self::new(&config.endpoint)
    }

    #[must_use]
    pub const fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Submit `draft` for review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Http`] on transport failure,
    /// [`ReviewError::Api`] on a non-success status, or
    /// [`ReviewError::Decode`] if the body is not a review response.
    pub async fn submit(&self, draft: &ArticleDraft) -> Result<ReviewResponse, ReviewError> {
        tracing::debug!(endpoint = %self.endpoint, "posting draft for review");
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(draft)
            .send()
            .await?;
        let resp = check_response(resp)?;

        let bytes = resp.bytes().await?;
        let response: ReviewResponse =
            serde_json::from_slice(&bytes).map_err(|e| ReviewError::Decode(e.to_string()))?;
        tracing::debug!(bytes = bytes.len(), "review response decoded");
        Ok(response)
    }
}

impl ReviewService for ReviewClient {
    fn review(
        &self,
        draft: &ArticleDraft,
    ) -> impl Future<Output = Result<ReviewResponse, ReviewError>> + Send {
        self.submit(draft)
    }
}
