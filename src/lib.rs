//! # servimav-client
//!
//! Rust client library for the Servimav HTTP API.
//!
//! Groups the remote API into typed namespaces (`auth`, `profile`); every
//! call is a single stateless HTTP round trip through a shared client with
//! a 30-second timeout. Default headers (`Content-Type: application/json`,
//! bearer `Authorization`) are injected per request but never overwrite
//! headers the caller sets.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use servimav_client::{LoginRequest, Result, ServimavClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ServimavClient::builder().build()?;
//!
//!     let login = client.auth()
//!         .login(&LoginRequest {
//!             email: "user@example.com".into(),
//!             password: "hunter2".into(),
//!         })
//!         .await?;
//!
//!     // The token is yours to keep; pass it to a new client for
//!     // authenticated calls.
//!     let client = ServimavClient::builder()
//!         .token(login.data.token)
//!         .build()?;
//!
//!     let profile = client.profile().get_profile().await?;
//!     println!("hello {}", profile.data.first_name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

// Re-exports for ergonomic usage
pub use client::{ServimavClient, ServimavClientBuilder, TokenResolver};
pub use config::Config;
pub use error::{Error, Result};
pub use models::auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use models::profile::{Address, AvatarUpload, Lang, ProfileUpdate, UserProfile};
pub use models::response::ApiResponse;
