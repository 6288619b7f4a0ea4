//! Data models for the Servimav API.

pub mod auth;
pub mod profile;
pub mod response;
