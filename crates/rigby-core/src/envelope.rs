//! The `{"json": ...}` RPC envelope.
//!
//! Requests wrap their payload as `{"json": payload}`. Successful responses
//! are unwrapped by [`decode_success`]; error responses are never decoded.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key wrapping request payloads and success results.
pub const ENVELOPE_KEY: &str = "json";

/// Key of the object synthesized for non-JSON success bodies.
pub const TEXT_KEY: &str = "text";

/// Request body sent to every RPC endpoint.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    pub json: &'a Value,
}

impl<'a> RequestEnvelope<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self { json: payload }
    }
}

/// Decode the body of a 2xx response into the logical result.
///
/// - empty or whitespace body: `null`
/// - object with a `json` key: the value of that key
/// - any other JSON: the parsed value unchanged
/// - not JSON: `{"text": body}`
pub fn decode_success(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) => match map.remove(ENVELOPE_KEY) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        Ok(other) => other,
        Err(_) => text_fallback(body),
    }
}

fn text_fallback(body: &str) -> Value {
    let mut map = Map::new();
    map.insert(TEXT_KEY.to_string(), Value::String(body.to_string()));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wraps_payload() {
        let payload = json!({"id": 7});
        let body = serde_json::to_value(RequestEnvelope::new(&payload)).unwrap();
        assert_eq!(body, json!({"json": {"id": 7}}));
    }

    #[test]
    fn request_wraps_null() {
        let body = serde_json::to_string(&RequestEnvelope::new(&Value::Null)).unwrap();
        assert_eq!(body, r#"{"json":null}"#);
    }

    #[test]
    fn unwraps_json_key() {
        assert_eq!(decode_success(r#"{"json":{"a":1}}"#), json!({"a": 1}));
    }

    #[test]
    fn unwraps_json_key_holding_null() {
        assert_eq!(decode_success(r#"{"json":null,"meta":{}}"#), Value::Null);
    }

    #[test]
    fn bare_object_unchanged() {
        assert_eq!(decode_success(r#"{"a":1}"#), json!({"a": 1}));
    }

    #[test]
    fn bare_scalar_and_array_unchanged() {
        assert_eq!(decode_success("42"), json!(42));
        assert_eq!(decode_success(r#"[{"json":1}]"#), json!([{"json": 1}]));
    }

    #[test]
    fn empty_body_is_null() {
        assert_eq!(decode_success(""), Value::Null);
        assert_eq!(decode_success(" \n\t"), Value::Null);
    }

    #[test]
    fn non_json_body_becomes_text() {
        assert_eq!(decode_success("not json"), json!({"text": "not json"}));
    }

    #[test]
    fn text_fallback_keeps_original_body() {
        let body = "<html>\n  ok\n</html>\n";
        assert_eq!(decode_success(body), json!({"text": body}));
    }
}
