//! HTTP client bound to the Servimav API.

use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use serde::Serialize;
use tracing::debug;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::transport::headers;

/// HTTP client bound to a base URL and a resolved bearer token.
///
/// The token is fixed at construction; header injection happens per
/// request via [`headers`]. Every method issues exactly one request and
/// maps non-2xx statuses to [`Error::Api`] with the original status and
/// body.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Build a client from configuration and an already-resolved token.
    ///
    /// The underlying client sends cookies with its requests and aborts
    /// any request still pending after [`config::REQUEST_TIMEOUT`].
    pub fn new(config: &Config, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, config, token))
    }

    /// Wrap a caller-supplied reqwest client.
    ///
    /// Timeout and cookie behavior are whatever the supplied client was
    /// built with; only base URL binding and header injection are added.
    pub fn with_client(client: reqwest::Client, config: &Config, token: Option<String>) -> Self {
        Self {
            client,
            base_url: config.base_url(),
            token,
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolved bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        self.get_with_headers(path, HeaderMap::new()).await
    }

    /// Send a GET request with explicit headers taking precedence over
    /// the injected defaults.
    pub async fn get_with_headers(
        &self,
        path: &str,
        headers: HeaderMap,
    ) -> Result<reqwest::Response> {
        let url = config::endpoint_url(&self.base_url, path);
        let hdrs = headers::with_json_defaults(headers, self.token.as_deref());

        debug!(url = url.as_str(), "GET");

        let response = self
            .client
            .get(&url)
            .headers(hdrs)
            .send()
            .await
            .map_err(map_send_error)?;

        check_status(response).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.post_json_with_headers(path, body, HeaderMap::new())
            .await
    }

    /// Send a POST request with a JSON body and explicit headers taking
    /// precedence over the injected defaults.
    pub async fn post_json_with_headers<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<reqwest::Response> {
        let url = config::endpoint_url(&self.base_url, path);
        let hdrs = headers::with_json_defaults(headers, self.token.as_deref());

        debug!(url = url.as_str(), "POST");

        let response = self
            .client
            .post(&url)
            .headers(hdrs)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        check_status(response).await
    }

    /// Send a POST request with a multipart form body.
    ///
    /// Only the `Authorization` default is injected here; reqwest sets
    /// the `multipart/form-data` content type with its boundary.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<reqwest::Response> {
        let url = config::endpoint_url(&self.base_url, path);
        let hdrs = headers::with_bearer_default(HeaderMap::new(), self.token.as_deref());

        debug!(url = url.as_str(), "POST multipart");

        let response = self
            .client
            .post(&url)
            .headers(hdrs)
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        check_status(response).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Network(e)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(Error::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> HttpClient {
        let mut config = Config::new().host(server.uri());
        if let Some(token) = token {
            config = config.token(token);
        }
        let token = config.token.clone();
        HttpClient::new(&config, token).unwrap()
    }

    #[tokio::test]
    async fn test_bearer_token_sent_on_the_wire() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("secret"));
        client.get("/api/profile").await.unwrap();
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        client.get("/api/profile").await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_json_content_type_injected_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/profile"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        client
            .post_json("/api/profile", &serde_json::json!({"k": "v"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_caller_headers_take_precedence() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer caller"),
        );

        let client = client_for(&mock_server, Some("configured"));
        client
            .get_with_headers("/api/profile", headers)
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].headers.get("content-type").unwrap(), "text/plain");
        assert_eq!(
            requests[0].headers.get("authorization").unwrap(),
            "Bearer caller"
        );
    }

    #[tokio::test]
    async fn test_non_2xx_passes_status_and_body_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string("The given data was invalid."),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        let err = client.get("/api/profile").await.unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "The given data was invalid.");
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }
}
