//! Tool definitions: metadata plus the handler that runs them.

use serde_json::Value;
use std::fmt;

use super::arguments::ToolArguments;
use super::handlers::{FnHandler, ToolHandler};
use crate::protocol::{InputSchema, ToolInfo};

/// One invocable tool.
///
/// The handler is owned by the definition and therefore by the registry entry
/// it ends up in; it is never shared with or reassigned to another tool.
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: InputSchema,
    handler: Box<dyn ToolHandler>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Box::new(handler),
        }
    }

    /// Expose a plain function as a tool.
    pub fn from_fn<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
        func: F,
    ) -> Self
    where
        F: Fn(&ToolArguments) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, description, input_schema, FnHandler::new(func))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }

    pub(crate) fn handler(&self) -> &dyn ToolHandler {
        self.handler.as_ref()
    }

    /// Public wire form (everything but the handler).
    pub fn to_info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema.clone(),
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}
