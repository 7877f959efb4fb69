use super::view_model::{LineRow, OrderDetailsViewModel};
use contracts::domain::a002_stock_item::StockItem;
use contracts::domain::a003_order::{Order, OrderStatus};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(
    initial: Option<Order>,
    /// Current stock snapshot; each option is annotated with the
    /// remaining stock
    stock_options: Signal<Vec<StockItem>>,
    on_saved: Callback<Order>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(initial.as_ref(), stock_options);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container order-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="customer_name">{"Customer Name"}</label>
                    <input
                        type="text"
                        id="customer_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.customer_name.get()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.customer_name.set(event_target_value(&ev))
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("customer_name").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="created_at">{"Order Date & Time"}</label>
                    <input
                        type="datetime-local"
                        id="created_at"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.created_at.get()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.created_at.set(event_target_value(&ev))
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("created_at").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group order-lines">
                    <label>{"Order Items"}</label>
                    <For
                        each={
                            let vm = vm_clone.clone();
                            move || vm.lines.get()
                        }
                        key=|row| row.key
                        children={
                            let vm = vm_clone.clone();
                            move |row: LineRow| {
                                let key = row.key;
                                let vm_item = vm.clone();
                                let vm_qty = vm.clone();
                                let vm_remove = vm.clone();
                                let item_value = {
                                    let vm = vm.clone();
                                    Signal::derive(move || {
                                        vm.lines.get()
                                            .iter()
                                            .find(|r| r.key == key)
                                            .map(|r| r.item_id.clone())
                                            .unwrap_or_default()
                                    })
                                };
                                let qty_value = {
                                    let vm = vm.clone();
                                    Signal::derive(move || {
                                        vm.lines.get()
                                            .iter()
                                            .find(|r| r.key == key)
                                            .map(|r| r.qty.clone())
                                            .unwrap_or_default()
                                    })
                                };
                                let line_error = {
                                    let vm = vm.clone();
                                    Signal::derive(move || {
                                        vm.lines.get()
                                            .iter()
                                            .find(|r| r.key == key)
                                            .and_then(|r| r.error.clone())
                                    })
                                };

                                view! {
                                    <div class="order-line">
                                        <div class="order-line__controls">
                                            <select
                                                class="order-line__item"
                                                prop:value=move || item_value.get()
                                                on:change=move |ev| vm_item.set_line_item(key, event_target_value(&ev))
                                            >
                                                <option value="" disabled=true selected=move || item_value.get().is_empty()>
                                                    {"Select coffee"}
                                                </option>
                                                {move || stock_options.get().into_iter().map(|item| {
                                                    let id = item.id.as_string();
                                                    let label = format!("{} ({})", item.name, item.stock);
                                                    let selected = {
                                                        let id = id.clone();
                                                        move || item_value.get() == id
                                                    };
                                                    view! {
                                                        <option value=id.clone() selected=selected>{label}</option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                            <input
                                                class="order-line__qty"
                                                type="number"
                                                min="1"
                                                placeholder="Qty"
                                                prop:value=move || qty_value.get()
                                                on:input=move |ev| vm_qty.set_line_qty(key, event_target_value(&ev))
                                            />
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| vm_remove.remove_line(key)
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                        {move || line_error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
                                    </div>
                                }
                            }
                        }
                    />
                    <button
                        class="button button--dashed"
                        on:click={
                            let vm = vm_clone.clone();
                            move |_| vm.add_line()
                        }
                    >
                        {"+ Add another coffee"}
                    </button>
                </div>

                <div class="form-group">
                    <label for="status">{"Order Status"}</label>
                    <select
                        id="status"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.status.get()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.status.set(event_target_value(&ev))
                        }
                    >
                        <option value="" disabled=true selected={
                            let vm = vm_clone.clone();
                            move || vm.status.get().is_empty()
                        }>
                            {"Select status"}
                        </option>
                        {OrderStatus::KNOWN.iter().map(|status| {
                            let value = status.to_string();
                            let selected = {
                                let vm = vm_clone.clone();
                                let value = value.clone();
                                move || vm.status.get() == value
                            };
                            view! {
                                <option value=value.clone() selected=selected>{value.clone()}</option>
                            }
                        }).collect_view()}
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("status").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        Signal::derive(move || vm.saving.get())
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.saving.get() {
                                "Submitting..."
                            } else if vm.is_edit_mode() {
                                "Save Order"
                            } else {
                                "Submit Order"
                            }
                        }
                    }
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
