//! Error types for the Servimav client.

/// Errors surfaced by the client.
///
/// Network and API failures pass through from the underlying HTTP client
/// without translation: [`Error::Api`] carries the original status code and
/// raw response body.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, TLS).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request did not settle within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// Client construction or request assembly failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A response body did not match the declared shape, or a request
    /// field could not be encoded.
    #[error("conversion error: {0}")]
    Conversion(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
