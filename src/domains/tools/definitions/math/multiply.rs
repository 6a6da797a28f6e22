//! Multiplication tool definition.

use serde_json::Value;

use super::common::{Operands, float_result, integer_result, operands_schema};
use crate::domains::tools::{ToolArguments, ToolDefinition, ToolHandler};

/// Multiply tool - returns `x * y`.
pub struct MultiplyTool;

impl MultiplyTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "multiply";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers";

    /// Create the registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, operands_schema(), Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for MultiplyTool {
    async fn execute(&self, arguments: &ToolArguments) -> anyhow::Result<Value> {
        match Operands::from_arguments(arguments)? {
            Operands::Integers(x, y) => integer_result(x.checked_mul(y), x as f64 * y as f64),
            Operands::Floats(x, y) => float_result(x * y),
        }
    }
}
