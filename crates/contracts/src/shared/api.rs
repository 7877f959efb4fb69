//! Decoding helpers for the backend's JSON error convention.
//!
//! The backend signals application failures with an `error` field in an
//! otherwise well-formed JSON body, usually under HTTP 200. A non-empty
//! `error` is therefore a failure regardless of transport status, and
//! its absence is success.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

/// Failure taxonomy for a single API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS)
    Transport(String),
    /// The response carried a non-empty `error` field; the message is
    /// meant for the user verbatim
    Backend(String),
    /// The response did not match the expected entity shape, or a
    /// non-2xx status arrived without an error envelope
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(detail) => write!(f, "request failed: {}", detail),
            ApiError::Backend(message) => f.write_str(message),
            ApiError::Decode(detail) => write!(f, "unexpected response: {}", detail),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

fn backend_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error)
        .filter(|msg| !msg.is_empty())
}

/// Decode a response body into an entity, honoring the error envelope
pub fn decode_entity<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Some(msg) = backend_error(body) {
        return Err(ApiError::Backend(msg));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a mutation ack (delete responses). Whatever the body carries
/// beyond the error envelope is ignored.
pub fn decode_ack(body: &str) -> Result<(), ApiError> {
    match backend_error(body) {
        Some(msg) => Err(ApiError::Backend(msg)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: i64,
        name: String,
    }

    #[test]
    fn entity_decodes_when_no_error_field() {
        let thing: Thing = decode_entity(r#"{"id": 1, "name": "Arabica"}"#).unwrap();
        assert_eq!(thing, Thing { id: 1, name: "Arabica".to_string() });
    }

    #[test]
    fn non_empty_error_wins_over_entity_shape() {
        let err = decode_entity::<Thing>(r#"{"error": "Not enough stock for item 1"}"#).unwrap_err();
        assert_eq!(err, ApiError::Backend("Not enough stock for item 1".to_string()));
    }

    #[test]
    fn empty_error_field_is_not_a_failure() {
        let thing: Thing = decode_entity(r#"{"error": "", "id": 2, "name": "Robusta"}"#).unwrap();
        assert_eq!(thing.id, 2);
    }

    #[test]
    fn array_bodies_have_no_envelope() {
        let things: Vec<Thing> = decode_entity(r#"[{"id": 1, "name": "Arabica"}]"#).unwrap();
        assert_eq!(things.len(), 1);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            decode_entity::<Thing>("<html>oops</html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn ack_accepts_any_error_free_body() {
        assert!(decode_ack(r#"{}"#).is_ok());
        assert!(decode_ack(r#"{"message": "Order deleted successfully"}"#).is_ok());
        assert_eq!(
            decode_ack(r#"{"error": "Order does not exist!"}"#).unwrap_err(),
            ApiError::Backend("Order does not exist!".to_string())
        );
    }
}
