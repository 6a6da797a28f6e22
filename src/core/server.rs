//! Tool server: the registry and dispatcher behind one cloneable handle.
//!
//! The registry is completely built before it is moved into the server and
//! frozen behind an `Arc`. Nothing can register a tool afterwards, so every
//! request the transport serves sees the same, fully validated set.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{InvocationResult, ToolDispatcher, ToolRegistry};
use crate::protocol::ToolInfo;

/// The server-side half of the protocol, independent of any transport.
#[derive(Debug, Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher, which also owns the shared registry.
    dispatcher: ToolDispatcher,
}

impl ToolServer {
    /// Create a server exposing the built-in tools.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::with_builtin_tools()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server exposing an already populated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        info!("Tool server ready with {} tools", registry.len());
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.dispatcher.registry()
    }

    /// List all tools in wire form, in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.registry().tool_infos()
    }

    /// Call a tool by name.
    pub async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> InvocationResult {
        self.dispatcher.dispatch(name, arguments).await
    }
}
