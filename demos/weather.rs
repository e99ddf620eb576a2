//! Registering tools and invoking them by name.

use std::sync::Arc;

use toolbelt::prelude::*;
use toolbelt::tools::builtin::weather_tool;

#[tokio::main]
async fn main() -> toolbelt::error::Result<()> {
    let mut registry = ToolRegistry::new();
    registry.register(weather_tool())?;
    registry.register(Arc::new(FunctionTool::new(
        "greet",
        "Greet a person by name",
        ToolParameters::object()
            .string("name", "Who to greet", true)
            .build(),
        |args, _ctx| async move {
            let name = args.get_str("name")?;
            Ok(format!("Hello, {name}!"))
        },
    )))?;

    // A host would advertise these definitions to its model.
    for def in registry.definitions() {
        println!("{}: {}", def.name, def.description);
    }

    let ctx = ToolExecutionContext::default();
    let call = ToolCall::new("get_weather", serde_json::json!({"city": "Tokyo"}));
    let result = registry.invoke(&call, &ctx).await?;
    println!("{}", result.content);

    let greeting = registry
        .invoke_value("greet", serde_json::json!({"name": "Naomi"}), &ctx)
        .await?;
    println!("{greeting}");

    Ok(())
}
