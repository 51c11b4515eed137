use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("figma API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access token file '{path}'")]
    Token {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the API rejected the access token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }
}
