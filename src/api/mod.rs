//! Typed namespaces over the Servimav API.

pub mod auth;
pub mod profile;
