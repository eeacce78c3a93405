use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content endpoint returned status {0}")]
    Status(u16),

    #[error("invalid configuration: {0}")]
    Config(String),
}
