//! Convenience re-exports for common use.

pub use crate::error::{Result, ToolbeltError};
pub use crate::tools::{
    FunctionTool, InvokerConfig, Tool, ToolArguments, ToolCall, ToolDefinition,
    ToolExecutionContext, ToolParameters, ToolRegistry, ToolResult,
};
