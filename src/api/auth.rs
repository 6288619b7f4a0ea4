//! Authentication operations.

use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::response::ApiResponse;
use crate::transport::http::HttpClient;

/// Authentication namespace.
///
/// Obtained from [`ServimavClient::auth`](crate::ServimavClient::auth).
#[derive(Debug)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Log in with email and password.
    ///
    /// On success the server returns the account together with a bearer
    /// token; persist the token and supply it on later calls.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<AuthResponse>> {
        debug!(path = config::LOGIN_PATH, "login");
        let response = self.http.post_json(config::LOGIN_PATH, request).await?;
        ApiResponse::read(response).await
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<AuthResponse>> {
        debug!(path = config::REGISTER_PATH, "register");
        let response = self.http.post_json(config::REGISTER_PATH, request).await?;
        ApiResponse::read(response).await
    }
}
