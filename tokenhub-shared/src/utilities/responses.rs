use serde_json::Value;

/// Pulls the human-readable message out of a backend error body.
/// `error` wins over `message`; anything else yields `None`.
pub fn extract_server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| json.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
