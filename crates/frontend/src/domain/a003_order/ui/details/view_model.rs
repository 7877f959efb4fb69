use super::model;
use crate::shared::date_utils;
use contracts::domain::a002_stock_item::{StockItem, StockItemId};
use contracts::domain::a003_order::validation::{validate_line, validate_order_head};
use contracts::domain::a003_order::{Order, OrderDraft, OrderId, OrderLineInput, OrderStatus};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use std::collections::HashMap;

/// One editable line row of the order form. `item_id` and `qty` hold
/// the raw control values; `error` is the row's inline message.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRow {
    pub key: usize,
    pub item_id: String,
    pub qty: String,
    pub error: Option<String>,
}

impl LineRow {
    fn empty(key: usize) -> Self {
        Self {
            key,
            item_id: String::new(),
            qty: String::new(),
            error: None,
        }
    }
}

/// Row check shared by live revalidation and submit
fn check_line(row: &LineRow, stock: &[StockItem]) -> Result<OrderLineInput, String> {
    let item_id = match row.item_id.trim() {
        "" => None,
        raw => StockItemId::from_string(raw).ok(),
    };
    validate_line(item_id, &row.qty, |id| {
        stock.iter().find(|item| item.id == id).map(|item| item.stock)
    })
}

/// ViewModel for the order details form
#[derive(Clone)]
pub struct OrderDetailsViewModel {
    editing_id: Option<OrderId>,
    pub customer_name: RwSignal<String>,
    /// `datetime-local` form; converted to the server form on submit
    pub created_at: RwSignal<String>,
    pub status: RwSignal<String>,
    pub lines: RwSignal<Vec<LineRow>>,
    pub field_errors: RwSignal<HashMap<&'static str, String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    next_key: StoredValue<usize>,
    stock_options: Signal<Vec<StockItem>>,
}

impl OrderDetailsViewModel {
    pub fn new(initial: Option<&Order>, stock_options: Signal<Vec<StockItem>>) -> Self {
        // Re-expand the stored item list into editable rows
        let lines: Vec<LineRow> = initial
            .map(|order| {
                order
                    .items
                    .iter()
                    .enumerate()
                    .map(|(key, line)| LineRow {
                        key,
                        item_id: line.item_id.as_string(),
                        qty: line.qty.to_string(),
                        error: None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        let next_key = lines.len();

        Self {
            editing_id: initial.map(|o| o.order_id),
            customer_name: RwSignal::new(
                initial.map(|o| o.customer_name.clone()).unwrap_or_default(),
            ),
            created_at: RwSignal::new(
                initial
                    .map(|o| date_utils::to_picker_value(&o.created_at))
                    .unwrap_or_default(),
            ),
            status: RwSignal::new(initial.map(|o| o.status.to_string()).unwrap_or_default()),
            lines: RwSignal::new(lines),
            field_errors: RwSignal::new(HashMap::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            next_key: StoredValue::new(next_key),
            stock_options,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors.get().get(field).cloned()
    }

    pub fn add_line(&self) {
        let key = self.next_key.get_value();
        self.next_key.set_value(key + 1);
        self.lines.update(|rows| rows.push(LineRow::empty(key)));
    }

    pub fn remove_line(&self, key: usize) {
        self.lines.update(|rows| rows.retain(|row| row.key != key));
    }

    /// A quantity that was fine for one coffee can exceed the stock of
    /// another, so the row is re-checked when the selection changes
    /// under an already-entered quantity.
    pub fn set_line_item(&self, key: usize, value: String) {
        let stock = self.stock_options.get_untracked();
        self.lines.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.key == key) {
                row.item_id = value;
                row.error = if row.qty.trim().is_empty() {
                    None
                } else {
                    check_line(row, &stock).err()
                };
            }
        });
    }

    pub fn set_line_qty(&self, key: usize, value: String) {
        self.lines.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.key == key) {
                row.qty = value;
                row.error = None;
            }
        });
    }

    /// Validate header and every line row, then submit. Backend errors
    /// keep the modal open with the message shown verbatim.
    pub fn save_command(&self, on_saved: Callback<Order>) {
        let customer_name = self.customer_name.get_untracked();
        let created_at = self.created_at.get_untracked();
        let status = self.status.get_untracked();

        let head = validate_order_head(&customer_name, &created_at, &status);
        match &head {
            Ok(()) => self.field_errors.set(HashMap::new()),
            Err(errors) => self.field_errors.set(errors.clone().into_iter().collect()),
        }

        let stock = self.stock_options.get_untracked();
        let mut order_items = Vec::new();
        let mut lines_ok = true;
        self.lines.update(|rows| {
            for row in rows.iter_mut() {
                match check_line(row, &stock) {
                    Ok(input) => {
                        row.error = None;
                        order_items.push(input);
                    }
                    Err(msg) => {
                        row.error = Some(msg);
                        lines_ok = false;
                    }
                }
            }
        });

        if head.is_err() || !lines_ok {
            return;
        }

        let draft = OrderDraft {
            customer_name,
            created_at: date_utils::to_server_value(&created_at),
            status: OrderStatus::from(status),
            order_items,
        };

        let editing_id = self.editing_id;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_order(editing_id, &draft).await {
                Ok(saved) => {
                    error.set(None);
                    on_saved.run(saved);
                }
                Err(ApiError::Backend(msg)) => error.set(Some(msg)),
                Err(e) => {
                    log::error!("order save failed: {}", e);
                    error.set(Some("Failed to create order".to_string()));
                }
            }
            saving.set(false);
        });
    }
}
