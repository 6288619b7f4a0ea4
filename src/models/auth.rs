//! Authentication request and response types.

use serde::{Deserialize, Serialize};

/// Account identity returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned account id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Successful login or registration payload.
///
/// The caller is responsible for persisting `token` and supplying it on
/// later calls; the client never stores it past construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Credentials for `auth().login()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `auth().register()`.
///
/// Embeds the login credentials; on the wire the fields are flattened into
/// a single flat object alongside `name` and `password_confirmation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(flatten)]
    pub credentials: LoginRequest,
    pub name: String,
    /// Must match `credentials.password`; checked server-side.
    pub password_confirmation: String,
}
