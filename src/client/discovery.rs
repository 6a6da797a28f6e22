//! Tool discovery client.
//!
//! Talks to a tool server over HTTP: lists its tools, wraps each one in a
//! [`CapabilityProxy`], and performs calls on behalf of those proxies.
//! Failures are never retried or swallowed here; the caller decides.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::error::{ClientError, ClientResult};
use super::proxy::CapabilityProxy;
use crate::core::ClientConfig;
use crate::protocol::{
    CALL_PATH, CallRequest, CallResponse, ErrorBody, ErrorKind, TOOLS_PATH, ToolInfo,
};

/// HTTP client for the tool protocol.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ToolDiscoveryClient {
    base_url: String,
    http: reqwest::Client,
}

impl ToolDiscoveryClient {
    /// Create a client for the server at `config.base_url`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let url = reqwest::Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme {:?}", url.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Create a client from `TOOL_RELAY_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Get the server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw tool list, in server order.
    #[instrument(skip(self), fields(server = %self.base_url))]
    pub async fn list_tools(&self) -> ClientResult<Vec<ToolInfo>> {
        let url = self.url(TOOLS_PATH);
        debug!("Fetching tool list from {}", url);

        let response = self.http.get(&url).send().await?;
        let tools: Vec<ToolInfo> = read_body(response).await?;

        info!("Discovered {} tools", tools.len());
        Ok(tools)
    }

    /// Fetch the tool list and build one proxy per tool.
    ///
    /// Every call builds fresh proxies; nothing is cached.
    pub async fn discover(&self) -> ClientResult<Vec<CapabilityProxy>> {
        let tools = self.list_tools().await?;
        Ok(tools
            .into_iter()
            .map(|info| CapabilityProxy::new(info, self.clone()))
            .collect())
    }

    /// Invoke a discovered capability.
    pub async fn invoke(
        &self,
        proxy: &CapabilityProxy,
        arguments: Map<String, Value>,
    ) -> ClientResult<Value> {
        self.call(proxy.name(), arguments).await
    }

    /// Call a tool by name and unwrap its result.
    #[instrument(skip(self, arguments), fields(server = %self.base_url))]
    pub async fn call(&self, name: &str, arguments: Map<String, Value>) -> ClientResult<Value> {
        let url = self.url(CALL_PATH);
        debug!("Calling tool {} at {}", name, url);

        let response = self
            .http
            .post(&url)
            .json(&CallRequest::new(name, arguments))
            .send()
            .await?;

        let body: CallResponse = read_body(response).await?;
        Ok(body.result)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or turn an error status into [`ClientError::Remote`].
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()));
    }

    match serde_json::from_slice::<ErrorBody>(&bytes) {
        Ok(body) => {
            let kind = body
                .kind
                .unwrap_or_else(|| ErrorKind::from_status(status.as_u16()));
            warn!("Server returned {}: {}", status, body.detail);
            Err(ClientError::Remote {
                kind,
                status: status.as_u16(),
                detail: body.detail,
            })
        }
        Err(_) => Err(ClientError::MalformedResponse(format!(
            "status {} with an unreadable error body",
            status
        ))),
    }
}
