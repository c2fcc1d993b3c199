//! Confirmation dialog for destructive actions.

use leptos::prelude::*;

use crate::components::modal::Modal;

/// Yes/no dialog built on [`Modal`]. Both buttons are disabled while the
/// confirmed action is in flight.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(default = "Delete")] confirm_text: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="dialog__danger">{message}</p>
            <div class="dialog__actions">
                <button
                    class="btn"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || busy.get()
                >
                    "Cancel"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_confirm.run(())
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Working..." } else { confirm_text }}
                </button>
            </div>
        </Modal>
    }
}
