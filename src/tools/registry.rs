//! Tool registry and the invocation boundary.
//!
//! A [`ToolRegistry`] maps names to [`Tool`] implementations and carries the
//! whole host-facing contract: register tools, advertise their definitions,
//! and invoke one by name with a structured payload. Invocation is stateless;
//! a shared `Arc<ToolRegistry>` is safe to call from concurrent tasks.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolExecutionContext};
use super::types::{ToolCall, ToolDefinition, ToolResult};
use super::validation::validate_arguments;
use crate::error::{Result, ToolbeltError};

/// Behavior knobs for the invocation boundary.
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// Validate payloads against the tool's schema before dispatch.
    pub validate_arguments: bool,
    /// Cap on result length in bytes; `None` disables truncation.
    pub max_result_bytes: Option<usize>,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            validate_arguments: true,
            max_result_bytes: None,
        }
    }
}

/// Name-addressed collection of tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    config: InvokerConfig,
}

impl ToolRegistry {
    /// Create an empty registry with default invoker behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with explicit invoker behavior.
    pub fn with_config(config: InvokerConfig) -> Self {
        Self {
            tools: HashMap::new(),
            config,
        }
    }

    /// Register a tool under its own name.
    ///
    /// Names are unique; a second registration under a taken name fails with
    /// [`ToolbeltError::DuplicateTool`] rather than silently replacing.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolbeltError::DuplicateTool(name));
        }
        debug!(tool = %name, "registered tool");
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Registered names, sorted for stable advertising.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions for every registered tool, sorted by name.
    ///
    /// This is the triple a host hands to its model when advertising
    /// capabilities.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters().schema.clone(),
            })
            .collect();
        defs.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute one named call and wrap the string message in a [`ToolResult`].
    ///
    /// Unknown names fail with `ToolNotFound`; schema violations fail with
    /// `InvalidArgument` before the tool body runs. Errors surface directly
    /// to the caller and nothing is retried.
    pub async fn invoke(
        &self,
        call: &ToolCall,
        ctx: &ToolExecutionContext,
    ) -> Result<ToolResult> {
        let tool = self
            .get(&call.name)
            .ok_or_else(|| ToolbeltError::ToolNotFound(call.name.clone()))?;

        if self.config.validate_arguments {
            validate_arguments(&call.arguments, &tool.parameters().schema)
                .map_err(|msg| ToolbeltError::InvalidArgument(format!("{}: {msg}", call.name)))?;
        }

        debug!(tool = %call.name, call_id = %call.id, "invoking tool");

        let args = ToolArguments::new(call.arguments.clone());
        let mut content = tool.execute(&args, ctx).await?;

        if let Some(max) = self.config.max_result_bytes {
            if content.len() > max {
                content = truncate_utf8(&content, max);
                content.push_str("\n... (truncated)");
            }
        }

        Ok(ToolResult {
            tool_call_id: call.id.clone(),
            content,
        })
    }

    /// Invoke by bare name and payload, returning the string message.
    ///
    /// Convenience over [`invoke`](Self::invoke) for hosts that do not track
    /// call ids.
    pub async fn invoke_value(
        &self,
        name: &str,
        arguments: serde_json::Value,
        ctx: &ToolExecutionContext,
    ) -> Result<String> {
        let call = ToolCall::new(name, arguments);
        Ok(self.invoke(&call, ctx).await?.content)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

fn truncate_utf8(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }

    let mut cutoff = max_bytes;
    while cutoff > 0 && !s.is_char_boundary(cutoff) {
        cutoff -= 1;
    }
    s[..cutoff].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tool::FunctionTool;
    use crate::tools::types::ToolParameters;

    fn echo_tool() -> Arc<dyn Tool> {
        Arc::new(FunctionTool::new(
            "echo",
            "Echo the message back",
            ToolParameters::object()
                .string("message", "Message to echo", true)
                .build(),
            |args, _ctx| async move { Ok(args.get_str("message")?.to_string()) },
        ))
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool()).unwrap();

        let err = registry.register(echo_tool()).unwrap_err();
        assert!(matches!(err, ToolbeltError::DuplicateTool(name) if name == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ToolRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register(Arc::new(FunctionTool::new(
                    name,
                    "noop",
                    ToolParameters::empty(),
                    |_args, _ctx| async move { Ok(String::new()) },
                )))
                .unwrap();
        }
        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn invoke_unknown_name_fails() {
        let registry = ToolRegistry::new();
        let call = ToolCall::new("missing", serde_json::json!({}));

        let err = registry
            .invoke(&call, &ToolExecutionContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolbeltError::ToolNotFound(name) if name == "missing"));
    }

    #[tokio::test]
    async fn invoke_validates_before_dispatch() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool()).unwrap();

        let call = ToolCall::new("echo", serde_json::json!({}));
        let err = registry
            .invoke(&call, &ToolExecutionContext::default())
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("echo"));
        assert!(text.contains("missing required field 'message'"));
    }

    #[tokio::test]
    async fn invoke_skips_validation_when_disabled() {
        let mut registry = ToolRegistry::with_config(InvokerConfig {
            validate_arguments: false,
            max_result_bytes: None,
        });
        registry
            .register(Arc::new(FunctionTool::new(
                "lenient",
                "Works without a payload",
                ToolParameters::object()
                    .string("message", "Unused", true)
                    .build(),
                |_args, _ctx| async move { Ok("fine".to_string()) },
            )))
            .unwrap();

        let call = ToolCall::new("lenient", serde_json::json!({}));
        let result = registry
            .invoke(&call, &ToolExecutionContext::default())
            .await
            .unwrap();
        assert_eq!(result.content, "fine");
    }

    #[tokio::test]
    async fn invoke_preserves_call_id() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool()).unwrap();

        let call = ToolCall::with_id("call_42", "echo", serde_json::json!({"message": "hi"}));
        let result = registry
            .invoke(&call, &ToolExecutionContext::default())
            .await
            .unwrap();

        assert_eq!(result.tool_call_id, "call_42");
        assert_eq!(result.content, "hi");
    }

    #[tokio::test]
    async fn invoke_truncates_oversized_results() {
        let mut registry = ToolRegistry::with_config(InvokerConfig {
            validate_arguments: true,
            max_result_bytes: Some(16),
        });
        registry.register(echo_tool()).unwrap();

        let long = "x".repeat(100);
        let result = registry
            .invoke_value(
                "echo",
                serde_json::json!({"message": long}),
                &ToolExecutionContext::default(),
            )
            .await
            .unwrap();

        assert!(result.ends_with("... (truncated)"));
        assert!(result.len() < 100);
    }

    #[test]
    fn truncate_utf8_never_splits_codepoints() {
        let s = "ab😀cd";
        assert_eq!(truncate_utf8(s, 0), "");
        assert_eq!(truncate_utf8(s, 2), "ab");
        // 3..=5 would cut into 😀 (a 4-byte codepoint), so back off to "ab".
        assert_eq!(truncate_utf8(s, 3), "ab");
        assert_eq!(truncate_utf8(s, 5), "ab");
        assert_eq!(truncate_utf8(s, 6), "ab😀");
        assert_eq!(truncate_utf8(s, 100), s);
    }
}
