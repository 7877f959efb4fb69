use super::view_model::StockItemDetailsViewModel;
use contracts::domain::a002_stock_item::StockItem;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StockItemDetails(
    initial: Option<StockItem>,
    on_saved: Callback<StockItem>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StockItemDetailsViewModel::new(initial.as_ref());

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container stock-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Coffee Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("name").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="origin">{"Coffee Origin"}</label>
                    <input
                        type="text"
                        id="origin"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().origin
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.origin = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("origin").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="stock">{"Available Stock Qty (bags)"}</label>
                    <input
                        type="number"
                        id="stock"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().stock
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.stock = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("stock").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="price">{"Price per Bag"}</label>
                    <input
                        type="number"
                        id="price"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.price = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("price").map(|msg| view! { <span class="form-error">{msg}</span> })
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
                                "Saving..."
                            } else if vm.is_edit_mode() {
                                "Save Coffee"
                            } else {
                                "Add Coffee!"
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
