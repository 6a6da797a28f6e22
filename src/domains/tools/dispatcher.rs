//! Invocation Dispatcher - validates and executes tool calls.
//!
//! A call goes through these steps, in order, and stops at the first failure:
//!
//! 1. look the tool up (`ToolNotFound`)
//! 2. check required arguments in declaration order (`MissingArgument`, first
//!    one only)
//! 3. type-check provided arguments against declared properties
//!    (`InvalidArgumentType`)
//! 4. run the handler; argument errors it raises keep their kind, any other
//!    error or panic becomes `ExecutionError`
//!
//! There are no retries: one call, one attempt.

use futures::FutureExt;
use serde_json::{Map, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::arguments::ToolArguments;
use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::protocol::{InputSchema, PrimitiveType};

/// Outcome of a dispatch: a success payload or a failure, never both.
pub type InvocationResult = Result<Value, ToolError>;

/// Dispatches calls against a frozen registry.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Validate and execute a call.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: Map<String, Value>) -> InvocationResult {
        let result = self.try_dispatch(name, arguments).await;
        match &result {
            Ok(_) => info!("Tool {} completed", name),
            Err(e) if e.kind().is_caller_error() => warn!("Rejected call to {}: {}", name, e),
            Err(e) => warn!("Tool {} failed: {}", name, e),
        }
        result
    }

    async fn try_dispatch(&self, name: &str, arguments: Map<String, Value>) -> InvocationResult {
        let tool = self.registry.lookup(name)?;
        let arguments = validate_arguments(tool.input_schema(), arguments)?;

        let outcome = AssertUnwindSafe(tool.handler().execute(&arguments))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(handler_error(err)),
            Err(panic) => Err(ToolError::execution(format!(
                "tool '{}' panicked: {}",
                name,
                panic_message(panic.as_ref())
            ))),
        }
    }
}

/// Check an argument mapping against a schema.
///
/// Required names are checked first, in declaration order. Types are checked
/// only for declared properties; undeclared arguments pass through.
pub fn validate_arguments(
    schema: &InputSchema,
    arguments: Map<String, Value>,
) -> Result<ToolArguments, ToolError> {
    if let Some(missing) = schema
        .required
        .iter()
        .find(|param| !arguments.contains_key(param.as_str()))
    {
        return Err(ToolError::missing_argument(missing.as_str()));
    }

    for (param, property) in &schema.properties {
        let Some(value) = arguments.get(param) else {
            continue;
        };
        if !property.kind.accepts(value) {
            return Err(ToolError::InvalidArgumentType {
                param: param.clone(),
                expected: property.kind,
                actual: PrimitiveType::of(value),
            });
        }
    }

    Ok(ToolArguments::new(arguments))
}

/// Argument errors raised by a handler's typed accessors are the caller's
/// fault and keep their kind; everything else is an execution failure.
fn handler_error(err: anyhow::Error) -> ToolError {
    match err.downcast_ref::<ToolError>() {
        Some(e @ (ToolError::MissingArgument(_) | ToolError::InvalidArgumentType { .. })) => {
            e.clone()
        }
        _ => ToolError::execution(format!("{err:#}")),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolDefinition;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn dispatcher() -> ToolDispatcher {
        let mut registry = ToolRegistry::with_builtin_tools().unwrap();
        registry
            .register(ToolDefinition::from_fn(
                "fail",
                "Always fails",
                InputSchema::new(),
                |_| anyhow::bail!("disk on fire"),
            ))
            .unwrap();
        registry
            .register(ToolDefinition::from_fn(
                "explode",
                "Always panics",
                InputSchema::new(),
                |_| panic!("kaboom"),
            ))
            .unwrap();
        registry
            .register(ToolDefinition::from_fn(
                "greet",
                "Greets someone",
                InputSchema::new()
                    .required("name", PrimitiveType::String)
                    .optional("shout", PrimitiveType::Boolean),
                |args| {
                    let greeting = format!("hello {}", args.string("name")?);
                    if args.contains("shout") && args.boolean("shout")? {
                        Ok(json!(greeting.to_uppercase()))
                    } else {
                        Ok(json!(greeting))
                    }
                },
            ))
            .unwrap();
        registry
            .register(ToolDefinition::from_fn(
                "repeat",
                "Repeats a word n times",
                InputSchema::new()
                    .required("word", PrimitiveType::String)
                    .required("n", PrimitiveType::Integer),
                |args| Ok(json!(args.string("word")?.repeat(args.integer("n")?.max(0) as usize))),
            ))
            .unwrap();
        registry
            .register(ToolDefinition::from_fn(
                "truncate",
                "Declares a number but reads an integer",
                InputSchema::new().required("n", PrimitiveType::Number),
                |args| Ok(json!(args.integer("n")?)),
            ))
            .unwrap();
        ToolDispatcher::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_dispatch_add() {
        let result = dispatcher().dispatch("add", object(json!({ "x": 2, "y": 3 }))).await;
        assert_eq!(result, Ok(json!(5)));
    }

    #[tokio::test]
    async fn test_dispatch_multiply() {
        let result = dispatcher()
            .dispatch("multiply", object(json!({ "x": 4, "y": 5 })))
            .await;
        assert_eq!(result, Ok(json!(20)));
    }

    #[tokio::test]
    async fn test_dispatch_missing_argument() {
        let result = dispatcher().dispatch("add", object(json!({ "x": 2 }))).await;
        assert_eq!(result, Err(ToolError::MissingArgument("y".to_string())));
    }

    #[tokio::test]
    async fn test_dispatch_reports_first_missing_argument() {
        let result = dispatcher().dispatch("add", Map::new()).await;
        assert_eq!(result, Err(ToolError::MissingArgument("x".to_string())));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let result = dispatcher().dispatch("unknown_tool", Map::new()).await;
        assert_eq!(result, Err(ToolError::ToolNotFound("unknown_tool".to_string())));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_checked_before_arguments() {
        let result = dispatcher()
            .dispatch("unknown_tool", object(json!({ "x": "bad" })))
            .await;
        assert!(matches!(result, Err(ToolError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_type() {
        let result = dispatcher()
            .dispatch("add", object(json!({ "x": "2", "y": 3 })))
            .await;
        assert_eq!(
            result,
            Err(ToolError::InvalidArgumentType {
                param: "x".to_string(),
                expected: PrimitiveType::Number,
                actual: PrimitiveType::String,
            })
        );
    }

    #[tokio::test]
    async fn test_missing_reported_before_invalid_type() {
        let result = dispatcher().dispatch("add", object(json!({ "x": "2" }))).await;
        assert_eq!(result, Err(ToolError::MissingArgument("y".to_string())));
    }

    #[tokio::test]
    async fn test_optional_argument_type_checked() {
        let dispatcher = dispatcher();

        let ok = dispatcher
            .dispatch("greet", object(json!({ "name": "ada", "shout": true })))
            .await;
        assert_eq!(ok, Ok(json!("HELLO ADA")));

        let bad = dispatcher
            .dispatch("greet", object(json!({ "name": "ada", "shout": "yes" })))
            .await;
        assert!(matches!(
            bad,
            Err(ToolError::InvalidArgumentType { ref param, .. }) if param == "shout"
        ));
    }

    #[tokio::test]
    async fn test_undeclared_arguments_pass_through() {
        let result = dispatcher()
            .dispatch("add", object(json!({ "x": 1, "y": 1, "note": "extra" })))
            .await;
        assert_eq!(result, Ok(json!(2)));
    }

    #[tokio::test]
    async fn test_handler_error_becomes_execution_error() {
        let result = dispatcher().dispatch("fail", Map::new()).await;
        assert_eq!(result, Err(ToolError::ExecutionError("disk on fire".to_string())));
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_execution_error() {
        let result = dispatcher().dispatch("explode", Map::new()).await;
        match result {
            Err(ToolError::ExecutionError(msg)) => assert!(msg.contains("kaboom")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_integer_beyond_i64_rejected_before_execution() {
        let dispatcher = dispatcher();

        let ok = dispatcher
            .dispatch("repeat", object(json!({ "word": "ab", "n": 2 })))
            .await;
        assert_eq!(ok, Ok(json!("abab")));

        for n in [json!(u64::MAX), json!(1e300)] {
            let result = dispatcher
                .dispatch("repeat", object(json!({ "word": "ab", "n": n })))
                .await;
            assert_eq!(
                result,
                Err(ToolError::InvalidArgumentType {
                    param: "n".to_string(),
                    expected: PrimitiveType::Integer,
                    actual: PrimitiveType::Number,
                })
            );
        }
    }

    #[tokio::test]
    async fn test_handler_argument_error_keeps_its_kind() {
        let result = dispatcher()
            .dispatch("truncate", object(json!({ "n": 2.5 })))
            .await;
        assert!(matches!(
            result,
            Err(ToolError::InvalidArgumentType { ref param, expected: PrimitiveType::Integer, .. })
                if param == "n"
        ));
        assert!(result.unwrap_err().kind().is_caller_error());
    }

    #[test]
    fn test_validate_arguments_directly() {
        let schema = InputSchema::new()
            .required("count", PrimitiveType::Integer)
            .optional("label", PrimitiveType::String);

        assert!(validate_arguments(&schema, object(json!({ "count": 3 }))).is_ok());
        assert!(validate_arguments(&schema, object(json!({ "count": 3.0 }))).is_ok());
        assert!(matches!(
            validate_arguments(&schema, object(json!({ "count": 3.5 }))),
            Err(ToolError::InvalidArgumentType { .. })
        ));
        assert!(matches!(
            validate_arguments(&schema, object(json!({ "count": 1, "label": null }))),
            Err(ToolError::InvalidArgumentType { actual: PrimitiveType::Null, .. })
        ));
    }
}
