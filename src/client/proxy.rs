//! Capability proxies: local stand-ins for remote tools.

use serde_json::{Map, Value};

use super::discovery::ToolDiscoveryClient;
use super::error::ClientResult;
use crate::protocol::{InputSchema, ToolInfo};

/// One discovered tool, callable as if it were local.
///
/// A proxy mirrors the wire definition and holds no server-side state; it is
/// safe to drop and rediscover at any time.
#[derive(Debug, Clone)]
pub struct CapabilityProxy {
    info: ToolInfo,
    client: ToolDiscoveryClient,
}

impl CapabilityProxy {
    pub(crate) fn new(info: ToolInfo, client: ToolDiscoveryClient) -> Self {
        Self { info, client }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn description(&self) -> &str {
        &self.info.description
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.info.input_schema
    }

    /// The wire definition this proxy was built from.
    pub fn info(&self) -> &ToolInfo {
        &self.info
    }

    /// Invoke the remote tool and unwrap its result.
    pub async fn invoke(&self, arguments: Map<String, Value>) -> ClientResult<Value> {
        self.client.call(&self.info.name, arguments).await
    }
}
