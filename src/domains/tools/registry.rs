//! Tool Registry - the authoritative set of tool definitions.
//!
//! This module provides:
//! - Registration with duplicate and schema-consistency checks
//! - Lookup by name (the dispatch key)
//! - Listing in registration order, for deterministic `GET /tools` output
//!
//! The registry is built once at startup and then frozen behind an `Arc`;
//! registration is the only mutation and needs `&mut self`.

use std::collections::HashMap;
use tracing::{info, warn};

use super::definition::ToolDefinition;
use super::definitions::builtin_tools;
use super::error::ToolError;
use crate::protocol::ToolInfo;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every registered tool.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tools (`add`, `multiply`,
    /// `divide`).
    pub fn with_builtin_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for tool in builtin_tools() {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Register a tool.
    ///
    /// The definition is fully validated before it becomes visible. A name
    /// that is already taken is rejected and the existing entry is kept.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        let name = definition.name();

        if name.trim().is_empty() {
            return Err(ToolError::invalid_definition("tool name must not be empty"));
        }

        if let Some(param) = definition.input_schema().undeclared_required() {
            return Err(ToolError::invalid_definition(format!(
                "tool '{}' requires parameter '{}' which is not declared in its properties",
                name, param
            )));
        }

        if self.index.contains_key(name) {
            warn!("Rejected duplicate registration of tool: {}", name);
            return Err(ToolError::DuplicateName(name.to_string()));
        }

        info!("Registered tool: {}", name);
        self.index.insert(name.to_string(), self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// Find a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// All tools, in registration order.
    pub fn list_all(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Wire form of every tool, in registration order.
    pub fn tool_infos(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(ToolDefinition::to_info).collect()
    }

    /// Get all tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
