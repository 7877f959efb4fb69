use super::view_model::CustomerDetailsViewModel;
use contracts::domain::a001_customer::Customer;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerDetails(
    initial: Option<Customer>,
    on_saved: Callback<Customer>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(initial.as_ref());

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container customer-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().username
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.username = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("username").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="name">{"Name"}</label>
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
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.email = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("email").map(|msg| view! { <span class="form-error">{msg}</span> })
                    }
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="+6281234567890"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().phone
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.phone = event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("phone").map(|msg| view! { <span class="form-error">{msg}</span> })
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
                                "Save"
                            } else {
                                "Add"
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
