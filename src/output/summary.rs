//! Human-readable text summary of a parse result.

use crate::parser::schema::ParseResult;
use serde_json::Value;

/// Render a short report of the exchange
pub fn format_summary(result: &ParseResult) -> String {
    let request = &result.request;
    let response = &result.response;

    let mut lines = vec![
        format!(
            "Request:  {} {} {}",
            request.method, request.path, request.protocol
        ),
        format!("  Headers: {}", request.headers.len()),
        format!("  Payload: {}", describe_payload(request.payload.as_ref())),
        format!(
            "Response: {} {} {}",
            response.protocol, response.status, response.message
        ),
        format!("  Headers: {}", response.headers.len()),
    ];

    if let Some(content_type) = response.header_value("Content-Type") {
        lines.push(format!("  Content-Type: {}", content_type));
    }

    lines.push(format!(
        "  Payload: {}",
        describe_payload(response.payload.as_ref())
    ));

    lines.join("\n")
}

fn describe_payload(payload: Option<&Value>) -> String {
    match payload {
        None => "none".to_string(),
        Some(Value::Object(map)) => format!("object ({} keys)", map.len()),
        Some(Value::Array(items)) => format!("array ({} items)", items.len()),
        Some(Value::String(_)) => "string".to_string(),
        Some(Value::Number(_)) => "number".to_string(),
        Some(Value::Bool(_)) => "boolean".to_string(),
        Some(Value::Null) => "null".to_string(),
    }
}
