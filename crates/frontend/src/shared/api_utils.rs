//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding
//! responses under the backend's error convention.

use contracts::shared::api::{decode_ack, decode_entity, ApiError};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Read a response body and decode it into an entity.
///
/// The error envelope wins over the HTTP status: a body carrying a
/// non-empty `error` field is a backend failure even under 200, and a
/// non-2xx status without an envelope is reported as-is.
pub async fn read_entity<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match decode_entity::<T>(&body) {
        Err(ApiError::Backend(msg)) => Err(ApiError::Backend(msg)),
        Ok(value) if ok => Ok(value),
        Err(err) if ok => Err(err),
        _ => Err(ApiError::Decode(format!("HTTP {}", status))),
    }
}

/// Read a mutation ack (delete responses)
pub async fn read_ack(response: Response) -> Result<(), ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match decode_ack(&body) {
        Err(ApiError::Backend(msg)) => Err(ApiError::Backend(msg)),
        Ok(()) if ok => Ok(()),
        _ => Err(ApiError::Decode(format!("HTTP {}", status))),
    }
}
