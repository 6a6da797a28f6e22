//! Tool-specific error types.

use thiserror::Error;

use crate::protocol::{ErrorKind, PrimitiveType};

/// Errors that can occur while registering or invoking tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool {0} not found")]
    ToolNotFound(String),

    /// A tool with this name is already registered.
    #[error("Tool {0} is already registered")]
    DuplicateName(String),

    /// The definition was rejected before registration.
    #[error("Invalid tool definition: {0}")]
    InvalidDefinition(String),

    /// A required argument was not provided.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// An argument does not match its declared type.
    #[error("Invalid type for argument '{param}': expected {expected}, got {actual}")]
    InvalidArgumentType {
        param: String,
        expected: PrimitiveType,
        actual: PrimitiveType,
    },

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    ExecutionError(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a new "invalid definition" error.
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(param: impl Into<String>) -> Self {
        Self::MissingArgument(param.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::ExecutionError(msg.into())
    }

    /// The wire kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolNotFound(_) => ErrorKind::ToolNotFound,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::InvalidDefinition(_) => ErrorKind::InvalidDefinition,
            Self::MissingArgument(_) => ErrorKind::MissingArgument,
            Self::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            Self::ExecutionError(_) => ErrorKind::ExecutionError,
        }
    }
}
