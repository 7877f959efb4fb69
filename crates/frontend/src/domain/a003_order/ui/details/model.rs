use crate::shared::api_utils::{api_base, read_entity};
use contracts::domain::a003_order::{Order, OrderDraft, OrderId};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use gloo_net::http::Request;

/// POST a new order or PUT an existing one; returns the stored record.
/// The server may reject independently of the client-side stock check
/// (it is authoritative for the ceiling), which comes back as a
/// backend error with the reason.
pub async fn save_order(id: Option<OrderId>, draft: &OrderDraft) -> Result<Order, ApiError> {
    let builder = match id {
        Some(id) => Request::put(&format!("{}/orders/{}", api_base(), id.as_string())),
        None => Request::post(&format!("{}/orders", api_base())),
    };
    let response = builder
        .json(draft)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}
