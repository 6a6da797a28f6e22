//! Helpers shared by the arithmetic tools.

use anyhow::anyhow;
use serde_json::{Number, Value};

use crate::domains::tools::{ToolArguments, ToolError};
use crate::protocol::{InputSchema, PrimitiveType, PropertySchema};

/// Schema of a binary operation on `x` and `y`.
pub fn operands_schema() -> InputSchema {
    InputSchema::new()
        .required("x", PropertySchema::new(PrimitiveType::Number).describe("First operand"))
        .required("y", PropertySchema::new(PrimitiveType::Number).describe("Second operand"))
}

/// The two operands of a binary operation.
///
/// Integer inputs stay integers so that `2 + 3` answers `5`, not `5.0`. They
/// are widened to `i128` so any JSON integer (`i64` or `u64`) is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Integers(i128, i128),
    Floats(f64, f64),
}

impl Operands {
    pub fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError> {
        let x = arguments.value("x")?;
        let y = arguments.value("y")?;

        match (json_integer(x), json_integer(y)) {
            (Some(x), Some(y)) => Ok(Self::Integers(x, y)),
            _ => Ok(Self::Floats(arguments.number("x")?, arguments.number("y")?)),
        }
    }
}

fn json_integer(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}

/// Wrap an integer result exactly when JSON can carry it, otherwise fall back
/// to the floating point `approx`.
pub fn integer_result(exact: Option<i128>, approx: f64) -> anyhow::Result<Value> {
    match exact {
        Some(n) => match (i64::try_from(n), u64::try_from(n)) {
            (Ok(n), _) => Ok(Value::from(n)),
            (_, Ok(n)) => Ok(Value::from(n)),
            _ => float_result(approx),
        },
        None => float_result(approx),
    }
}

/// Wrap a floating point result, rejecting NaN and infinities.
pub fn float_result(value: f64) -> anyhow::Result<Value> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| anyhow!("result is not a finite number: {}", value))
}
