use std::env;

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the content API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash.
    pub base_url: String,
    /// Bearer token for saves. Reads do not need one.
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must be http(s), got {base_url:?}"
            )));
        }
        Ok(Self {
            base_url,
            token: None,
        })
    }

    /// `SITE_API_BASE_URL` (default `http://localhost:3000`) and
    /// `SITE_API_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("SITE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            token: env::var("SITE_API_TOKEN").ok().filter(|t| !t.is_empty()),
            ..Self::new(base_url)?
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn content_url(&self) -> String {
        format!("{}/api/content", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("https://example.com/").unwrap();
        assert_eq!(config.content_url(), "https://example.com/api/content");
    }

    #[test]
    fn rejects_non_http_origin() {
        assert!(matches!(
            ClientConfig::new("localhost:3000"),
            Err(ClientError::Config(_))
        ));
    }
}
