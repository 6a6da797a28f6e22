//! Client-side error types.

use thiserror::Error;

use crate::protocol::ErrorKind;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the discovery client and its capability proxies.
///
/// Server-reported failures keep their kind so a caller can tell its own
/// mistakes (unknown tool, bad arguments) from server faults. Everything that
/// prevented a well-formed answer from arriving is a transport error.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error status.
    #[error("{kind} (HTTP {status}): {detail}")]
    Remote {
        kind: ErrorKind,
        status: u16,
        detail: String,
    },

    /// The request could not be sent or the response could not be read,
    /// including timeouts.
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with the expected body.
    #[error("Malformed response from server: {0}")]
    MalformedResponse(String),

    /// The configured base URL is unusable.
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// The failure kind, as the calling agent would branch on it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Remote { kind, .. } => *kind,
            Self::Http(_) | Self::MalformedResponse(_) | Self::InvalidBaseUrl { .. } => {
                ErrorKind::TransportError
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::TransportError
    }

    /// Whether the request was timed out on the client side. The tool may
    /// still have run on the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
