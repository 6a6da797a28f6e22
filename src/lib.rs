//! Tool Relay Library
//!
//! This crate implements a minimal remote tool-invocation protocol: a server
//! advertises named tools with declared input schemas, and a client discovers
//! them and invokes them over HTTP.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **protocol**: The wire contract shared by both sides (schemas, request and
//!   response bodies, error kinds)
//! - **core**: Configuration, error handling, the `ToolServer` handle and the
//!   HTTP transport (feature `server`)
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool registry, argument validation and dispatch
//! - **client**: Discovery client and capability proxies (feature `client`)
//!
//! # Example
//!
//! ```rust,no_run
//! use tool_relay::core::{Config, HttpTransport, ToolServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToolServer::new(config.clone())?;
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod core;
pub mod domains;
pub mod protocol;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Result, ToolServer};
pub use crate::domains::tools::{ToolDefinition, ToolError, ToolRegistry};
