//! Validate tool call arguments against JSON Schema before execution.

/// Validate tool arguments against a JSON Schema.
///
/// Performs top-level validation: schema type check, required field presence,
/// property type verification, and enum membership. Returns `Ok(())` when
/// valid, `Err(message)` describing the first violation found.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    let declared = schema.get("type").and_then(|t| t.as_str());
    if declared == Some("object") && !args.is_object() {
        return Err(format!("expected object arguments, got {}", type_of(args)));
    }

    let Some(payload) = args.as_object() else {
        return Ok(());
    };

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for name in required.iter().filter_map(|n| n.as_str()) {
            if !payload.contains_key(name) {
                return Err(format!("missing required field '{name}'"));
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
        return Ok(());
    };

    for (name, value) in payload {
        // Extra fields not described by the schema are allowed.
        let Some(prop) = properties.get(name) else {
            continue;
        };
        if let Some(expected) = prop.get("type").and_then(|t| t.as_str()) {
            if !is_type(value, expected) {
                return Err(format!(
                    "field '{name}' expected type '{expected}', got {}",
                    type_of(value)
                ));
            }
        }
        if let Some(allowed) = prop.get("enum").and_then(|e| e.as_array()) {
            if !allowed.contains(value) {
                return Err(format!("field '{name}' is not one of the allowed values"));
            }
        }
    }

    Ok(())
}

fn is_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
