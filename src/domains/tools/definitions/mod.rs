//! Tool definitions module.
//!
//! This module exports all built-in tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod math;

pub use math::{AddTool, DivideTool, MultiplyTool};

use super::definition::ToolDefinition;

/// Every built-in tool, in the order it is registered.
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![
        AddTool::definition(),
        MultiplyTool::definition(),
        DivideTool::definition(),
    ]
}
