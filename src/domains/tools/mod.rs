//! Tools domain module.
//!
//! This module handles the server side of the tool protocol: which tools
//! exist, and how a call against one of them is validated and executed.
//!
//! ## Architecture
//!
//! - `definitions/` - Built-in tool implementations (one file per tool)
//! - `definition.rs` - `ToolDefinition`: name, description, schema, handler
//! - `handlers.rs` - The `ToolHandler` trait and the closure adapter
//! - `registry.rs` - Central tool registry (register, lookup, list)
//! - `dispatcher.rs` - Argument validation and execution
//! - `arguments.rs` - Checked argument mapping handed to handlers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define `NAME`, `DESCRIPTION`, `definition()` and implement `ToolHandler`
//! 3. Add it to `builtin_tools()` in `definitions/mod.rs`
//!
//! Or, for a one-off, register `ToolDefinition::from_fn(...)` directly.

mod arguments;
mod definition;
pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;

pub use arguments::ToolArguments;
pub use definition::ToolDefinition;
pub use dispatcher::{InvocationResult, ToolDispatcher, validate_arguments};
pub use error::ToolError;
pub use handlers::{FnHandler, ToolHandler};
pub use registry::ToolRegistry;
