//! Toolbelt — tool definition and invocation for agent hosts.
//!
//! Lets application code define tools (named capabilities with a
//! JSON-Schema-described argument object) and lets an enclosing agent
//! framework invoke them by name with a structured payload, receiving a
//! plain string result or a typed error. Planning, prompt construction,
//! model calls, and transport all stay on the host's side of the boundary.
//!
//! # Quick Start
//!
//! ```
//! use toolbelt::prelude::*;
//! use toolbelt::tools::builtin::weather_tool;
//!
//! # async fn example() -> toolbelt::error::Result<()> {
//! let mut registry = ToolRegistry::new();
//! registry.register(weather_tool())?;
//!
//! let ctx = ToolExecutionContext::default();
//! let report = registry
//!     .invoke_value("get_weather", serde_json::json!({"city": "Paris"}), &ctx)
//!     .await?;
//! assert_eq!(report, "The weather in Paris is Sunny, 25°C");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prelude;
pub mod tools;
