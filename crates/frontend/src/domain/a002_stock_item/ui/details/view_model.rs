use super::model;
use contracts::domain::a002_stock_item::validation::{parse_stock_form, StockItemForm};
use contracts::domain::a002_stock_item::{StockItem, StockItemId};
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use std::collections::HashMap;

/// ViewModel for the stock item details form. The numeric fields stay
/// free text until submit, where `parse_stock_form` is the boundary.
#[derive(Clone)]
pub struct StockItemDetailsViewModel {
    editing_id: Option<StockItemId>,
    pub form: RwSignal<StockItemForm>,
    pub field_errors: RwSignal<HashMap<&'static str, String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StockItemDetailsViewModel {
    pub fn new(initial: Option<&StockItem>) -> Self {
        Self {
            editing_id: initial.map(|item| item.id),
            form: RwSignal::new(initial.map(StockItemForm::from_item).unwrap_or_default()),
            field_errors: RwSignal::new(HashMap::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors.get().get(field).cloned()
    }

    pub fn save_command(&self, on_saved: Callback<StockItem>) {
        let draft = match parse_stock_form(&self.form.get_untracked()) {
            Ok(draft) => {
                self.field_errors.set(HashMap::new());
                draft
            }
            Err(errors) => {
                self.field_errors.set(errors.into_iter().collect());
                return;
            }
        };

        let editing_id = self.editing_id;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_stock_item(editing_id, &draft).await {
                Ok(saved) => {
                    error.set(None);
                    on_saved.run(saved);
                }
                Err(ApiError::Backend(msg)) => error.set(Some(msg)),
                Err(e) => {
                    log::error!("stock save failed: {}", e);
                    error.set(Some("Failed to add/modify coffee".to_string()));
                }
            }
            saving.set(false);
        });
    }
}
