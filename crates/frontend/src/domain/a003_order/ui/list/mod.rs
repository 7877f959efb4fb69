use crate::domain::a002_stock_item::ui::list::fetch_stock_items;
use crate::domain::a003_order::ui::details::OrderDetails;
use crate::shared::api_utils::{api_base, read_ack, read_entity};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use contracts::domain::a002_stock_item::{StockItem, StockItemId};
use contracts::domain::a003_order::{items_summary, Order, OrderId, OrderStatus};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use contracts::shared::entity_map::EntityMap;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One rendered table row. The item list is pre-joined into a display
/// string so the template stays flat.
#[derive(Clone, Debug)]
struct OrderRow {
    id: OrderId,
    customer_name: String,
    created_at: String,
    status: OrderStatus,
    items_list: String,
}

#[component]
pub fn OrderList() -> impl IntoView {
    let store = RwSignal::new(EntityMap::<OrderId, Order>::new());
    // Snapshot of the stock catalog: annotates the item options in the
    // form and resolves names for lines patched in from mutation echoes.
    let stock_store = RwSignal::new(EntityMap::<StockItemId, StockItem>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<Order>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<OrderId>>(None);

    let load_orders = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_orders().await {
                Ok(records) => {
                    store.update(|map| map.rebuild(records.into_iter().map(|o| (o.order_id, o))));
                    set_error.set(None);
                }
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("order fetch failed: {}", e);
                    set_error.set(Some("Failed to fetch orders".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let load_stock = move || {
        spawn_local(async move {
            match fetch_stock_items().await {
                Ok(records) => {
                    stock_store
                        .update(|map| map.rebuild(records.into_iter().map(|item| (item.id, item))));
                }
                Err(e) => {
                    log::error!("stock snapshot fetch failed: {}", e);
                    set_error.set(Some("Failed to fetch coffee items".to_string()));
                }
            }
        });
    };

    let handle_create_new = move || {
        set_editing.set(None);
        set_show_details.set(true);
    };

    let close_details = move || {
        set_show_details.set(false);
        set_editing.set(None);
    };

    let on_saved = Callback::new(move |saved: Order| {
        store.update(|map| map.upsert(saved.order_id, saved));
        close_details();
    });
    let on_cancel = Callback::new(move |_: ()| close_details());

    let confirm_delete = move || {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match delete_order(id).await {
                Ok(()) => store.update(|map| map.remove(&id)),
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("order delete failed: {}", e);
                    set_error.set(Some("Failed to delete order".to_string()));
                }
            }
        });
    };

    let rows = move || {
        let stock = stock_store.get();
        store
            .get()
            .values()
            .into_iter()
            .map(|order| OrderRow {
                id: order.order_id,
                items_list: items_summary(&order.items, |id| {
                    stock.get(&id).map(|item| item.name.clone())
                }),
                customer_name: order.customer_name,
                created_at: order.created_at,
                status: order.status,
            })
            .collect::<Vec<_>>()
    };

    let stock_options = Signal::derive(move || stock_store.get().values());

    load_orders();
    load_stock();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Coffee Orders"}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        "Add New Order"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_orders();
                            load_stock();
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Order ID"}</th>
                            <th class="table__header-cell">{"Customer"}</th>
                            <th class="table__header-cell">{"Created At"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Items List"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let delete_id = row.id;
                            let edit_id = row.id;
                            let status_style = format!("color: {}; font-weight: 600;", row.status.color());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id.value()}</td>
                                    <td class="table__cell">{row.customer_name}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
                                        <span class="status-label" style=status_style>{row.status.to_string()}</span>
                                    </td>
                                    <td class="table__cell">{row.items_list}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| {
                                                let record = store.get_untracked().get(&edit_id).cloned();
                                                if record.is_some() {
                                                    set_editing.set(record);
                                                    set_show_details.set(true);
                                                }
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| set_pending_delete.set(Some(delete_id))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                {move || {
                    let initial = editing.get_untracked();
                    let title = if initial.is_some() { "Edit Order" } else { "Add New Order" };
                    view! {
                        <Modal title=title.to_string() on_close=Callback::new(move |_| close_details())>
                            <OrderDetails
                                initial=initial.clone()
                                stock_options=stock_options
                                on_saved=on_saved
                                on_cancel=on_cancel
                            />
                        </Modal>
                    }
                }}
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    message="Are you sure you want to delete?".to_string()
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    let url = format!("{}/orders?_ts={}", api_base(), js_sys::Date::now() as i64);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}

async fn delete_order(id: OrderId) -> Result<(), ApiError> {
    let url = format!("{}/orders/{}", api_base(), id.as_string());
    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_ack(response).await
}
