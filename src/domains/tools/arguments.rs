//! Checked tool arguments.

use serde_json::{Map, Value};

use super::error::ToolError;
use crate::protocol::{PrimitiveType, integer_value};

/// Argument mapping after it passed schema validation.
///
/// Only the dispatcher builds these from caller input, so handlers can rely
/// on required parameters being present and declared types being respected.
/// The typed accessors still check, and report a mismatch as a [`ToolError`]
/// rather than panicking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Raw access to an argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// An argument that must be present.
    pub fn value(&self, name: &str) -> Result<&Value, ToolError> {
        self.values
            .get(name)
            .ok_or_else(|| ToolError::missing_argument(name))
    }

    pub fn number(&self, name: &str) -> Result<f64, ToolError> {
        let value = self.value(name)?;
        value
            .as_f64()
            .ok_or_else(|| mismatch(name, PrimitiveType::Number, value))
    }

    pub fn integer(&self, name: &str) -> Result<i64, ToolError> {
        let value = self.value(name)?;
        match value {
            Value::Number(n) => integer_value(n),
            _ => None,
        }
        .ok_or_else(|| mismatch(name, PrimitiveType::Integer, value))
    }

    pub fn string(&self, name: &str) -> Result<&str, ToolError> {
        let value = self.value(name)?;
        value
            .as_str()
            .ok_or_else(|| mismatch(name, PrimitiveType::String, value))
    }

    pub fn boolean(&self, name: &str) -> Result<bool, ToolError> {
        let value = self.value(name)?;
        value
            .as_bool()
            .ok_or_else(|| mismatch(name, PrimitiveType::Boolean, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn mismatch(name: &str, expected: PrimitiveType, value: &Value) -> ToolError {
    ToolError::InvalidArgumentType {
        param: name.to_string(),
        expected,
        actual: PrimitiveType::of(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArguments {
        match value {
            Value::Object(map) => ToolArguments::new(map),
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_typed_accessors() {
        let args = args(json!({ "n": 2.5, "i": 4.0, "s": "hi", "b": true }));
        assert_eq!(args.number("n").unwrap(), 2.5);
        assert_eq!(args.integer("i").unwrap(), 4);
        assert_eq!(args.string("s").unwrap(), "hi");
        assert!(args.boolean("b").unwrap());
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn test_missing_argument() {
        let args = args(json!({}));
        assert_eq!(args.number("x"), Err(ToolError::missing_argument("x")));
    }

    #[test]
    fn test_type_mismatch() {
        let args = args(json!({ "x": "five", "y": 1.5 }));
        assert_eq!(
            args.number("x"),
            Err(ToolError::InvalidArgumentType {
                param: "x".to_string(),
                expected: PrimitiveType::Number,
                actual: PrimitiveType::String,
            })
        );
        assert!(matches!(
            args.integer("y"),
            Err(ToolError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn test_integer_out_of_range() {
        let args = args(json!({ "big": u64::MAX, "huge": 1e300, "min": i64::MIN }));
        assert_eq!(args.integer("min").unwrap(), i64::MIN);
        assert_eq!(
            args.integer("big"),
            Err(ToolError::InvalidArgumentType {
                param: "big".to_string(),
                expected: PrimitiveType::Integer,
                actual: PrimitiveType::Number,
            })
        );
        assert!(args.integer("huge").is_err());
    }
}
