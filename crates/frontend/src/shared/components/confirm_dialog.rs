use crate::shared::components::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Confirmation gate in front of destructive actions. Its open/closed
/// state lives in the caller; the dialog only reports the outcome.
#[component]
pub fn ConfirmDialog(
    /// Question shown to the user
    message: String,
    /// Called when the user confirms; the caller performs the action
    on_confirm: Callback<()>,
    /// Called on cancel, overlay click or Escape
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Attention!".to_string() on_close=on_cancel>
            <p class="confirm-dialog__message">{message}</p>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                >
                    "OK"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
}
