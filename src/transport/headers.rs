//! Default header injection for outgoing requests.
//!
//! Both functions are pure and idempotent: they only fill headers that are
//! absent, so caller-set values always win and repeated application is safe.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Fill the JSON defaults on a request's headers.
///
/// Sets `Content-Type: application/json` and the bearer `Authorization`
/// header, each only when absent.
pub fn with_json_defaults(headers: HeaderMap, token: Option<&str>) -> HeaderMap {
    let mut headers = with_bearer_default(headers, token);

    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    headers
}

/// Fill only the bearer `Authorization` default.
///
/// Used for multipart requests: reqwest supplies the `multipart/form-data`
/// boundary header there, and the JSON content type must not fire.
pub fn with_bearer_default(mut headers: HeaderMap, token: Option<&str>) -> HeaderMap {
    if headers.contains_key(AUTHORIZATION) {
        return headers;
    }

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .unwrap_or_else(|_| HeaderValue::from_static("Bearer invalid")),
        );
    }

    headers
}
