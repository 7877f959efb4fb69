use super::model;
use contracts::domain::a001_customer::validation::validate_customer;
use contracts::domain::a001_customer::{Customer, CustomerDraft, CustomerId};
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use std::collections::HashMap;

/// ViewModel for the customer details form
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    editing_id: Option<CustomerId>,
    pub form: RwSignal<CustomerDraft>,
    pub field_errors: RwSignal<HashMap<&'static str, String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new(initial: Option<&Customer>) -> Self {
        Self {
            editing_id: initial.map(|c| c.id),
            form: RwSignal::new(initial.map(Customer::to_draft).unwrap_or_default()),
            field_errors: RwSignal::new(HashMap::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Inline message for one form field, if any
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors.get().get(field).cloned()
    }

    /// Validate and submit. `on_saved` receives the entity the server
    /// returned; a backend error keeps the modal open for correction.
    pub fn save_command(&self, on_saved: Callback<Customer>) {
        let draft = self.form.get_untracked();
        match validate_customer(&draft) {
            Ok(()) => self.field_errors.set(HashMap::new()),
            Err(errors) => {
                self.field_errors.set(errors.into_iter().collect());
                return;
            }
        }

        let editing_id = self.editing_id;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_customer(editing_id, &draft).await {
                Ok(saved) => {
                    error.set(None);
                    on_saved.run(saved);
                }
                Err(ApiError::Backend(msg)) => error.set(Some(msg)),
                Err(e) => {
                    log::error!("customer save failed: {}", e);
                    error.set(Some("Failed to save user".to_string()));
                }
            }
            saving.set(false);
        });
    }
}
