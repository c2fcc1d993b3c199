//! Generic modal dialog with backdrop dismissal.

use leptos::prelude::*;

/// Modal dialog. Clicking the backdrop closes it; clicks inside the dialog
/// body do not propagate out.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
