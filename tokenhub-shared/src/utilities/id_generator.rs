use uuid::Uuid;

/// Generates a correlation id sent as `X-Request-Id` with every API call
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4())
}
