//! Tool discovery client (feature: `client`).
//!
//! Fetches a server's tool list and hands out [`CapabilityProxy`] values that
//! an agent can invoke without knowing anything about HTTP:
//!
//! ```rust,no_run
//! use serde_json::{Map, json};
//! use tool_relay::client::ToolDiscoveryClient;
//! use tool_relay::core::ClientConfig;
//!
//! # async fn run() -> Result<(), tool_relay::client::ClientError> {
//! let client = ToolDiscoveryClient::new(&ClientConfig::new("http://localhost:8000"))?;
//! for tool in client.discover().await? {
//!     println!("{}: {}", tool.name(), tool.description());
//! }
//!
//! let mut args = Map::new();
//! args.insert("x".into(), json!(10));
//! args.insert("y".into(), json!(-3));
//! let sum = client.call("add", args).await?;
//! assert_eq!(sum, json!(7));
//! # Ok(())
//! # }
//! ```

mod discovery;
mod error;
mod proxy;

pub use discovery::ToolDiscoveryClient;
pub use error::{ClientError, ClientResult};
pub use proxy::CapabilityProxy;
