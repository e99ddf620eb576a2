//! Error types for Toolbelt.

use thiserror::Error;

/// Primary error type for all Toolbelt operations.
#[derive(Error, Debug)]
pub enum ToolbeltError {
    /// A required argument is missing, empty, or has the wrong type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The invoker was asked for a name no registered tool carries.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// A second tool was registered under an already-taken name.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// The tool body itself failed.
    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Broad error category for routing by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    NotFound,
    Registration,
    ToolExecution,
    Serialization,
}

impl ToolbeltError {
    /// Create a tool execution error.
    pub fn execution(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecution {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Self::ToolNotFound(_) => ErrorCategory::NotFound,
            Self::DuplicateTool(_) => ErrorCategory::Registration,
            Self::ToolExecution { .. } => ErrorCategory::ToolExecution,
            Self::Serialization(_) => ErrorCategory::Serialization,
        }
    }

    /// Whether the caller supplied a bad payload (as opposed to the tool failing).
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::InvalidArgument | ErrorCategory::NotFound | ErrorCategory::Serialization
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ToolbeltError>;
