//! Tool handlers module.
//!
//! A handler is the executable half of a tool definition. The registry owns
//! each handler behind a `Box<dyn ToolHandler>`, so built-in tools, closures
//! and user types all share the same calling contract.

use serde_json::Value;

use super::arguments::ToolArguments;

/// Executable behavior of a tool.
///
/// Implementations receive arguments that have already been checked against
/// the tool's input schema. Any `Err` is reported to the caller as an
/// execution error; it never takes the server down.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated arguments.
    async fn execute(&self, arguments: &ToolArguments) -> anyhow::Result<Value>;
}

/// Adapter turning a plain function into a [`ToolHandler`].
pub struct FnHandler<F> {
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&ToolArguments) -> anyhow::Result<Value> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait::async_trait]
impl<F> ToolHandler for FnHandler<F>
where
    F: Fn(&ToolArguments) -> anyhow::Result<Value> + Send + Sync,
{
    async fn execute(&self, arguments: &ToolArguments) -> anyhow::Result<Value> {
        (self.func)(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    #[tokio::test]
    async fn test_fn_handler_executes_closure() {
        let handler = FnHandler::new(|args: &ToolArguments| {
            let name = args.string("name")?;
            Ok(json!(format!("hello {name}")))
        });

        let mut map = Map::new();
        map.insert("name".to_string(), json!("world"));
        let result = handler.execute(&ToolArguments::new(map)).await.unwrap();
        assert_eq!(result, json!("hello world"));
    }

    #[tokio::test]
    async fn test_fn_handler_propagates_error() {
        let handler = FnHandler::new(|_: &ToolArguments| anyhow::bail!("boom"));
        let err = handler.execute(&ToolArguments::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
