use crate::shared::api_utils::{api_base, read_entity};
use contracts::domain::a001_customer::{Customer, CustomerDraft, CustomerId};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use gloo_net::http::Request;

/// POST a new customer or PUT an existing one; returns the record the
/// server stored, which is what patches the screen's local map.
pub async fn save_customer(
    id: Option<CustomerId>,
    draft: &CustomerDraft,
) -> Result<Customer, ApiError> {
    let builder = match id {
        Some(id) => Request::put(&format!("{}/users/{}", api_base(), id.as_string())),
        None => Request::post(&format!("{}/users", api_base())),
    };
    let response = builder
        .json(draft)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}
