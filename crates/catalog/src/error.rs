//! Catalog client error model.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration value present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Request could not be sent or the connection failed.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("catalog backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not in a shape we understand.
    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    /// Backend reported a failure inside its result envelope.
    #[error("catalog backend reported an error: {0}")]
    Upstream(String),
}

impl CatalogError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
