//! Client configuration: endpoint and auth context.

use std::env;

use crate::error::{Result, SpeechError};

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "CODEKIT_BASE_URL";
/// Environment variable holding the OAuth access token.
pub const ACCESS_TOKEN_ENV: &str = "CODEKIT_ACCESS_TOKEN";

/// Immutable endpoint and auth configuration for a
/// [`SpeechClient`](crate::SpeechClient).
///
/// Token acquisition (the OAuth dance) happens outside this crate; the config
/// only carries the resulting bearer token.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    base_url: String,
    access_token: String,
}

impl CloudConfig {
    /// Create a config from an explicit base URL and access token.
    ///
    /// A trailing slash on the base URL is stripped so endpoint paths can be
    /// appended directly.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Read the config from `CODEKIT_BASE_URL` and `CODEKIT_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_ENV)
            .map_err(|_| SpeechError::Configuration(format!("{BASE_URL_ENV} is not set")))?;
        let access_token = env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| SpeechError::Configuration(format!("{ACCESS_TOKEN_ENV} is not set")))?;
        Ok(Self::new(base_url, access_token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}
