//! Tool system for function calling.

pub mod arguments;
pub mod builtin;
pub mod registry;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use registry::{InvokerConfig, ToolRegistry};
pub use tool::{FunctionTool, Tool, ToolExecutionContext};
pub use types::{ToolCall, ToolDefinition, ToolParameters, ToolResult};
