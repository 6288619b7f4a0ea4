//! HTTP transport for the Servimav API.

pub mod headers;
pub mod http;
