use serde_json::Value;

/// Renders a JSON value with two-space indentation, keeping the server's key order.
pub fn pretty(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
