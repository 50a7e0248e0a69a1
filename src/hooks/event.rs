//! Hook payload read from stdin

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::Result;

/// A tool invocation the assistant is about to perform.
///
/// ```json
/// { "tool": "Bash", "params": { "command": "pnpm test" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInvocation {
    /// Tool identifier, e.g. "Bash"
    #[serde(default)]
    pub tool: String,

    /// Tool parameters, passed through untouched
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ToolInvocation {
    /// Decode a payload. Shape mismatches (non-object payload, non-string
    /// `tool`, non-object `params`) are decode errors. Duplicate keys keep
    /// the last value.
    pub fn from_json(raw: &str) -> Result<Self> {
        // Derived struct decoding also accepts arrays by position, so only
        // objects are let through.
        match serde_json::from_str::<Value>(raw)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))
            .into()),
        }
    }

    /// Whether this invocation targets `tool`.
    pub fn is_tool(&self, tool: &str) -> bool {
        self.tool == tool
    }

    /// The `command` parameter, or "" when it is missing or not a string.
    pub fn command(&self) -> &str {
        self.params
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
