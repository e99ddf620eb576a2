//! Structured argument payload passed to tools.

use serde::de::DeserializeOwned;

use crate::error::ToolbeltError;

/// JSON argument payload for one tool invocation.
///
/// Wraps the raw object the host handed over and exposes typed accessors
/// that fail with [`ToolbeltError::InvalidArgument`] instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap a raw JSON payload.
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw payload.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Required string field.
    pub fn get_str(&self, key: &str) -> Result<&str, ToolbeltError> {
        self.value.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
            ToolbeltError::InvalidArgument(format!("missing or non-string field '{key}'"))
        })
    }

    /// Optional string field.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Required integer field.
    pub fn get_i64(&self, key: &str) -> Result<i64, ToolbeltError> {
        self.value.get(key).and_then(|v| v.as_i64()).ok_or_else(|| {
            ToolbeltError::InvalidArgument(format!("missing or non-integer field '{key}'"))
        })
    }

    /// Required boolean field.
    pub fn get_bool(&self, key: &str) -> Result<bool, ToolbeltError> {
        self.value.get(key).and_then(|v| v.as_bool()).ok_or_else(|| {
            ToolbeltError::InvalidArgument(format!("missing or non-boolean field '{key}'"))
        })
    }

    /// Deserialize the whole payload into a typed argument struct.
    ///
    /// Decode failures are the caller's fault, so they surface as
    /// `InvalidArgument` rather than a serialization error.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ToolbeltError> {
        serde_json::from_value(self.value.clone())
            .map_err(|e| ToolbeltError::InvalidArgument(e.to_string()))
    }
}
