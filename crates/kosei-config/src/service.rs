//! Review service endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/review";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Full URL the draft is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl ServiceConfig {
    /// Parse the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the endpoint is not an
    /// absolute `http`/`https` URL.
    pub fn endpoint_url(&self) -> Result<url::Url, ConfigError> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::invalid("service.endpoint", e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::invalid(
                "service.endpoint",
                format!("unsupported scheme '{other}'"),
            )),
        }
    }
}
