//! Division tool definition.

use anyhow::bail;
use serde_json::Value;

use super::common::{Operands, float_result, operands_schema};
use crate::domains::tools::{ToolArguments, ToolDefinition, ToolHandler};

/// Divide tool - returns `x / y`, always as a floating point number.
pub struct DivideTool;

impl DivideTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "divide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Divide x by y";

    /// Create the registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, operands_schema(), Self)
    }
}

#[async_trait::async_trait]
impl ToolHandler for DivideTool {
    async fn execute(&self, arguments: &ToolArguments) -> anyhow::Result<Value> {
        let (x, y) = match Operands::from_arguments(arguments)? {
            Operands::Integers(x, y) => (x as f64, y as f64),
            Operands::Floats(x, y) => (x, y),
        };

        if y == 0.0 {
            bail!("division by zero");
        }
        float_result(x / y)
    }
}
