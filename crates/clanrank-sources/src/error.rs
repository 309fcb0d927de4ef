use thiserror::Error;

/// Errors returned by the source clients and cache.
///
/// Note: a player missing from a source is not an error — clients return
/// `Ok(None)` for that case and the engine scores the absence as zero.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be constructed.
    #[error("invalid URL: {0}")]
    Url(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
