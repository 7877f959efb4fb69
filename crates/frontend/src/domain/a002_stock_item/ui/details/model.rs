use crate::shared::api_utils::{api_base, read_entity};
use contracts::domain::a002_stock_item::{StockItem, StockItemDraft, StockItemId};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use gloo_net::http::Request;

/// POST a new stock item or PUT an existing one; returns the stored record
pub async fn save_stock_item(
    id: Option<StockItemId>,
    draft: &StockItemDraft,
) -> Result<StockItem, ApiError> {
    let builder = match id {
        Some(id) => Request::put(&format!("{}/stocks/{}", api_base(), id.as_string())),
        None => Request::post(&format!("{}/stocks", api_base())),
    };
    let response = builder
        .json(draft)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}
