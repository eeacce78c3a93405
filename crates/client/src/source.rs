use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use site_content_core::ContentDocument;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Where handles fetch content from and the editor saves to.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The raw `content` member of the content endpoint, if any.
    async fn fetch(&self) -> Result<Option<Value>, ClientError>;

    /// Replace the stored document.
    async fn save(&self, content: &ContentDocument) -> Result<(), ClientError>;
}

#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    #[serde(default)]
    content: Option<Value>,
}

/// [`ContentSource`] talking to the content API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpContentSource {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<Option<Value>, ClientError> {
        let response = self.http.get(self.config.content_url()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        let envelope: ContentEnvelope = response.json().await?;
        Ok(envelope.content)
    }

    async fn save(&self, content: &ContentDocument) -> Result<(), ClientError> {
        let mut request = self.http.put(self.config.content_url()).json(content);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
