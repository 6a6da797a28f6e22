//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the tool
//! server, including error handling, configuration, the transport-independent
//! server handle and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{ClientConfig, Config};
pub use error::{Error, Result};
pub use server::ToolServer;
pub use transport::{HttpConfig, TransportError};

#[cfg(feature = "server")]
pub use transport::HttpTransport;
