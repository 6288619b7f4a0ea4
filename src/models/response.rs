//! Generic typed response wrapper.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// A decoded API response.
///
/// Status, headers, and body all pass through from the underlying HTTP
/// response; only the body is decoded into the declared shape.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status of the response (always 2xx; non-2xx surfaces as
    /// [`Error::Api`] before this wrapper is built).
    pub status: StatusCode,
    /// Response headers, unmodified.
    pub headers: HeaderMap,
    /// Decoded response body.
    pub data: T,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Capture status and headers, then decode the body.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let data = response
            .json::<T>()
            .await
            .map_err(|e| Error::Conversion(format!("failed to decode response body: {e}")))?;

        Ok(Self {
            status,
            headers,
            data,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Consume the wrapper, returning the decoded body.
    pub fn into_inner(self) -> T {
        self.data
    }
}
