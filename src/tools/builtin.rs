//! Built-in tools.
//!
//! Currently just `get_weather`, a canned conditions report used to exercise
//! the full invocation path end to end. Each tool is constructed via
//! [`FunctionTool::new`] and returned as `Arc<dyn Tool>`.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::ToolbeltError;
use crate::tools::tool::{FunctionTool, Tool, ToolExecutionContext};
use crate::tools::types::ToolParameters;

#[derive(Debug, Deserialize)]
struct WeatherArgs {
    city: String,
}

/// Create the `get_weather` tool — reports conditions for a city.
///
/// The lookup is a fixed placeholder; no external service is consulted.
/// Fails with `InvalidArgument` when `city` is empty or all whitespace.
pub fn weather_tool() -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_weather",
        "Get the current weather for a city",
        ToolParameters::object()
            .string("city", "The city to get weather for.", true)
            .build(),
        |args, _ctx: ToolExecutionContext| async move {
            let WeatherArgs { city } = args.deserialize()?;
            let city = city.trim();
            if city.is_empty() {
                return Err(ToolbeltError::InvalidArgument(
                    "city must not be empty".into(),
                ));
            }

            debug!(city = %city, "getting weather");
            Ok(format!("The weather in {city} is Sunny, 25°C"))
        },
    ))
}

/// Return all built-in tools.
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![weather_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::arguments::ToolArguments;

    fn default_ctx() -> ToolExecutionContext {
        ToolExecutionContext::default()
    }

    fn args(json: serde_json::Value) -> ToolArguments {
        ToolArguments::new(json)
    }

    #[tokio::test]
    async fn weather_reports_fixed_conditions_for_city() {
        let tool = weather_tool();
        let report = tool
            .execute(&args(serde_json::json!({"city": "Paris"})), &default_ctx())
            .await
            .unwrap();

        assert_eq!(report, "The weather in Paris is Sunny, 25°C");
    }

    #[tokio::test]
    async fn weather_rejects_empty_city() {
        let tool = weather_tool();
        let err = tool
            .execute(&args(serde_json::json!({"city": ""})), &default_ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, ToolbeltError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn weather_rejects_whitespace_city() {
        let tool = weather_tool();
        let err = tool
            .execute(&args(serde_json::json!({"city": "   "})), &default_ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, ToolbeltError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn weather_rejects_missing_city() {
        let tool = weather_tool();
        let err = tool
            .execute(&args(serde_json::json!({})), &default_ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, ToolbeltError::InvalidArgument(_)));
    }

    #[test]
    fn weather_schema_describes_required_city() {
        let tool = weather_tool();
        let schema = &tool.parameters().schema;

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["city"]["type"], "string");
        assert_eq!(
            schema["properties"]["city"]["description"],
            "The city to get weather for."
        );
        assert_eq!(schema["required"][0], "city");
    }

    #[test]
    fn each_builtin_has_nonempty_description() {
        for tool in all_tools() {
            assert!(
                !tool.description().is_empty(),
                "tool '{}' has empty description",
                tool.name()
            );
        }
    }
}
