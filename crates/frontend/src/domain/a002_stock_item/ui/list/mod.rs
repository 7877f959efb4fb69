use crate::domain::a002_stock_item::ui::details::StockItemDetails;
use crate::shared::api_utils::{api_base, read_ack, read_entity};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::a002_stock_item::{StockItem, StockItemId};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use contracts::shared::entity_map::EntityMap;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Fixed client-side page size of the card grid
const PAGE_SIZE: usize = 8;

#[component]
pub fn StockItemList() -> impl IntoView {
    let store = RwSignal::new(EntityMap::<StockItemId, StockItem>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<StockItem>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<StockItemId>>(None);
    let (page, set_page) = signal(0usize);

    let total_pages = Signal::derive(move || store.get().len().div_ceil(PAGE_SIZE));
    // Deleting the last card of the last page must not leave an empty page
    let current_page = Signal::derive(move || page.get().min(total_pages.get().saturating_sub(1)));

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_stock_items().await {
                Ok(records) => {
                    store.update(|map| map.rebuild(records.into_iter().map(|item| (item.id, item))));
                    set_error.set(None);
                }
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("stock fetch failed: {}", e);
                    set_error.set(Some("Failed to fetch items".to_string()));
                }
            }
            set_loading.set(false);
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

    let on_saved = Callback::new(move |saved: StockItem| {
        store.update(|map| map.upsert(saved.id, saved));
        close_details();
    });
    let on_cancel = Callback::new(move |_: ()| close_details());

    let confirm_delete = move || {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match delete_stock_item(id).await {
                Ok(()) => store.update(|map| map.remove(&id)),
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("stock delete failed: {}", e);
                    set_error.set(Some("Failed to delete item".to_string()));
                }
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Available Coffee Beans"}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        "Add New Item"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
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

            <div class="card-grid">
                {move || {
                    store.get()
                        .values()
                        .into_iter()
                        .skip(current_page.get() * PAGE_SIZE)
                        .take(PAGE_SIZE)
                        .map(|item| {
                            let edit_item = item.clone();
                            let delete_id = item.id;
                            let sold_out = item.stock == 0;
                            view! {
                                <div class="card">
                                    <div class="card__title">{item.name.clone()}</div>
                                    <div class="card__body">
                                        <p><strong>{"Origin: "}</strong>{item.origin.clone()}</p>
                                        <p>
                                            <strong>{"Stock: "}</strong>
                                            <span class="card__stock" class:card__stock--sold-out=sold_out>
                                                {item.stock_label()}
                                            </span>
                                        </p>
                                        <p><strong>{"Price: "}</strong>{format!("Rp.{} / bag", item.price)}</p>
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| {
                                                set_editing.set(Some(edit_item.clone()));
                                                set_show_details.set(true);
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
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="card-grid__pagination">
                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    total_count=Signal::derive(move || store.get().len())
                    on_page_change=Callback::new(move |next| set_page.set(next))
                />
            </div>

            <Show when=move || show_details.get()>
                {move || {
                    let initial = editing.get_untracked();
                    let title = if initial.is_some() { "Edit Coffee" } else { "Add New Coffee" };
                    view! {
                        <Modal title=title.to_string() on_close=Callback::new(move |_| close_details())>
                            <StockItemDetails initial=initial.clone() on_saved=on_saved on_cancel=on_cancel />
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

/// Also consumed by the order board, which annotates its item options
/// with the current stock snapshot.
pub async fn fetch_stock_items() -> Result<Vec<StockItem>, ApiError> {
    let url = format!("{}/stocks?_ts={}", api_base(), js_sys::Date::now() as i64);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}

async fn delete_stock_item(id: StockItemId) -> Result<(), ApiError> {
    let url = format!("{}/stocks/{}", api_base(), id.as_string());
    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_ack(response).await
}
