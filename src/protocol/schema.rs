//! Input schema types shared by the server and the client.
//!
//! The schema is a deliberately small subset of JSON Schema:
//!
//! ```json
//! {
//!   "type": "object",
//!   "properties": { "x": { "type": "number" } },
//!   "required": ["x"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Primitive types a tool parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

impl PrimitiveType {
    /// The name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }

    /// Classify a JSON value.
    ///
    /// Numbers without a fractional part that fit in an `i64` are reported
    /// as `integer`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if integer_value(n).is_some() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Whether `value` satisfies this declared type.
    ///
    /// Coercion rules:
    /// - any number satisfies `number`, integers included;
    /// - a number with a zero fractional part in `i64` range satisfies
    ///   `integer` (`3.0` does, `1e300` and `u64::MAX` do not);
    /// - nothing else is coerced: `"3"` is not a number and `null` only
    ///   satisfies `null`.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Number, Value::Number(_)) => true,
            (Self::Integer, Value::Number(n)) => integer_value(n).is_some(),
            (expected, value) => *expected == Self::of(value),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `i64` a JSON number stands for, if it is integral and in range.
pub(crate) fn integer_value(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return None;
    }
    // i64::MIN is exactly representable, i64::MAX rounds up to 2^63.
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

/// The top-level schema type. Only `"object"` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    #[default]
    Object,
}

/// Declaration of a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: PrimitiveType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    pub fn new(kind: PrimitiveType) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<PrimitiveType> for PropertySchema {
    fn from(kind: PrimitiveType) -> Self {
        Self::new(kind)
    }
}

/// Schema describing the arguments a tool accepts.
///
/// Properties are kept in a sorted map so that serialization is stable;
/// `required` keeps declaration order, which is also the order in which
/// missing arguments are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type", default)]
    pub kind: SchemaType,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,

    #[serde(default)]
    pub required: Vec<String>,
}

impl InputSchema {
    /// An empty object schema (a tool taking no arguments).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter the caller must provide.
    pub fn required(mut self, name: impl Into<String>, property: impl Into<PropertySchema>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name.clone());
        }
        self.properties.insert(name, property.into());
        self
    }

    /// Declare a parameter the caller may omit.
    pub fn optional(mut self, name: impl Into<String>, property: impl Into<PropertySchema>) -> Self {
        self.properties.insert(name.into(), property.into());
        self
    }

    /// Look up a declared parameter.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.get(name)
    }

    /// First required name that is not declared among the properties, if any.
    ///
    /// A consistent schema returns `None`.
    pub fn undeclared_required(&self) -> Option<&str> {
        self.required
            .iter()
            .find(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
    }
}
