//! Error types and handling for the tool relay.
//!
//! This module defines a unified error type that can represent errors from
//! the tools domain, the transport and the client, providing consistent
//! error handling across the entire application.

use thiserror::Error;

/// A specialized Result type for tool relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error raised while running the HTTP endpoint.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Error raised by the discovery client.
    #[cfg(feature = "client")]
    #[error("Client error: {0}")]
    Client(#[from] crate::client::ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_from_tool_error() {
        let err: Error = ToolError::DuplicateName("add".to_string()).into();
        assert!(matches!(err, Error::Tool(ToolError::DuplicateName(_))));
        assert_eq!(err.to_string(), "Tool error: Tool add is already registered");
    }

    #[test]
    fn test_from_transport_error() {
        let err: Error = crate::core::TransportError::http("listener closed").into();
        assert_eq!(err.to_string(), "Transport error: HTTP error: listener closed");
    }

    #[cfg(feature = "client")]
    #[test]
    fn test_from_client_error() {
        let err: Error = crate::client::ClientError::MalformedResponse("empty body".to_string()).into();
        assert!(matches!(err, Error::Client(_)));
    }
}
