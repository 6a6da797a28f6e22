//! Transport layer for the tool server.
//!
//! The reference binding is HTTP + JSON (`http`, feature: `server`). The
//! configuration and error types are always available so that `Config` can be
//! loaded by client-only builds too.

mod config;
mod error;

#[cfg(feature = "server")]
mod api_error;

#[cfg(feature = "server")]
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "server")]
pub use api_error::ApiError;

#[cfg(feature = "server")]
pub use http::HttpTransport;
