use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::api_utils::{api_base, read_ack, read_entity};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::{Customer, CustomerId};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;
use contracts::shared::entity_map::EntityMap;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    // Screen-owned store: id-keyed, rebuilt on fetch, patched on mutations
    let store = RwSignal::new(EntityMap::<CustomerId, Customer>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<Customer>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<CustomerId>>(None);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_customers().await {
                Ok(records) => {
                    store.update(|map| map.rebuild(records.into_iter().map(|c| (c.id, c))));
                    set_error.set(None);
                }
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("customer fetch failed: {}", e);
                    set_error.set(Some("Failed to fetch users".to_string()));
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

    // The single returned entity is trusted to patch local state; no refetch
    let on_saved = Callback::new(move |saved: Customer| {
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
            match delete_customer(id).await {
                Ok(()) => store.update(|map| map.remove(&id)),
                Err(ApiError::Backend(msg)) => set_error.set(Some(msg)),
                Err(e) => {
                    log::error!("customer delete failed: {}", e);
                    set_error.set(Some("Failed to delete user".to_string()));
                }
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"All Customer Data"}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        "Add Customer"
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

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Username"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.get().values().into_iter().map(|record| {
                            let edit_record = record.clone();
                            let delete_id = record.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{record.id.value()}</td>
                                    <td class="table__cell">{record.username}</td>
                                    <td class="table__cell">{record.name}</td>
                                    <td class="table__cell">{record.email}</td>
                                    <td class="table__cell">{record.phone}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| {
                                                set_editing.set(Some(edit_record.clone()));
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
                    let title = if initial.is_some() { "Edit User" } else { "Add User" };
                    view! {
                        <Modal title=title.to_string() on_close=Callback::new(move |_| close_details())>
                            <CustomerDetails initial=initial.clone() on_saved=on_saved on_cancel=on_cancel />
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

async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    let url = format!("{}/users?_ts={}", api_base(), js_sys::Date::now() as i64);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_entity(response).await
}

async fn delete_customer(id: CustomerId) -> Result<(), ApiError> {
    let url = format!("{}/users/{}", api_base(), id.as_string());
    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_ack(response).await
}
