//! Request and response bodies exchanged over HTTP.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::schema::InputSchema;

/// Path of the listing operation (`GET`).
pub const TOOLS_PATH: &str = "/tools";

/// Path of the invocation operation (`POST`).
pub const CALL_PATH: &str = "/call";

/// Public wire form of a tool definition. The executable behavior is never
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// Body of `POST /call`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub name: String,

    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl CallRequest {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Successful `POST /call` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    pub result: Value,
}

/// Body of every non-200 response.
///
/// `detail` is the minimal contract; `kind` lets a client tell failure kinds
/// apart without parsing the message. A `kind` this side does not know reads
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,

    #[serde(
        default,
        deserialize_with = "known_kind",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<ErrorKind>,
}

fn known_kind<'de, D>(deserializer: D) -> Result<Option<ErrorKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// Failure taxonomy shared by the server and the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No tool is registered under the requested name.
    ToolNotFound,
    /// A tool with the same name is already registered.
    DuplicateName,
    /// A definition was rejected at registration time.
    InvalidDefinition,
    /// A required argument was absent.
    MissingArgument,
    /// An argument did not match its declared type.
    InvalidArgumentType,
    /// The tool ran and failed.
    ExecutionError,
    /// The request itself could not be understood.
    InvalidRequest,
    /// Unexpected fault inside the endpoint.
    InternalError,
    /// The client could not reach the server or read its answer.
    TransportError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolNotFound => "tool_not_found",
            Self::DuplicateName => "duplicate_name",
            Self::InvalidDefinition => "invalid_definition",
            Self::MissingArgument => "missing_argument",
            Self::InvalidArgumentType => "invalid_argument_type",
            Self::ExecutionError => "execution_error",
            Self::InvalidRequest => "invalid_request",
            Self::InternalError => "internal_error",
            Self::TransportError => "transport_error",
        }
    }

    /// HTTP status the endpoint answers with for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ToolNotFound => 404,
            Self::MissingArgument | Self::InvalidArgumentType | Self::InvalidRequest => 400,
            Self::DuplicateName
            | Self::InvalidDefinition
            | Self::ExecutionError
            | Self::InternalError => 500,
            Self::TransportError => 502,
        }
    }

    /// Best guess at the kind when a server answered without one.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::ToolNotFound,
            400..=499 => Self::InvalidRequest,
            _ => Self::ExecutionError,
        }
    }

    /// Whether the caller sent something wrong, as opposed to a server fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::ToolNotFound | Self::MissingArgument | Self::InvalidArgumentType | Self::InvalidRequest
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_request_arguments_default_to_empty() {
        let request: CallRequest = serde_json::from_value(json!({ "name": "add" })).unwrap();
        assert_eq!(request.name, "add");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_call_request_rejects_non_object_arguments() {
        let result: Result<CallRequest, _> =
            serde_json::from_value(json!({ "name": "add", "arguments": [1, 2] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let body = ErrorBody {
            detail: "Missing required argument: y".to_string(),
            kind: Some(ErrorKind::MissingArgument),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "detail": "Missing required argument: y", "kind": "missing_argument" })
        );
    }

    #[test]
    fn test_error_body_without_kind() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "nope" })).unwrap();
        assert_eq!(body.kind, None);
    }

    #[test]
    fn test_error_body_with_unknown_kind() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "detail": "slow down", "kind": "rate_limited" })).unwrap();
        assert_eq!(body.detail, "slow down");
        assert_eq!(body.kind, None);

        let body: ErrorBody = serde_json::from_value(json!({ "detail": "x", "kind": 7 })).unwrap();
        assert_eq!(body.kind, None);
    }

    #[test]
    fn test_error_kind_as_str_matches_serde() {
        for kind in [
            ErrorKind::ToolNotFound,
            ErrorKind::MissingArgument,
            ErrorKind::InvalidArgumentType,
            ErrorKind::ExecutionError,
            ErrorKind::InternalError,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::ToolNotFound.status_code(), 404);
        assert_eq!(ErrorKind::MissingArgument.status_code(), 400);
        assert_eq!(ErrorKind::InvalidArgumentType.status_code(), 400);
        assert_eq!(ErrorKind::ExecutionError.status_code(), 500);

        assert_eq!(ErrorKind::from_status(404), ErrorKind::ToolNotFound);
        assert_eq!(ErrorKind::from_status(400), ErrorKind::InvalidRequest);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::ExecutionError);
        assert!(ErrorKind::MissingArgument.is_caller_error());
        assert!(!ErrorKind::ExecutionError.is_caller_error());
    }
}
