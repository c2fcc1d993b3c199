//! Toast presentation: stack host plus a fire-and-forget `show` helper.
//!
//! TRADE-OFFS
//! ==========
//! Auto-dismiss needs a browser timer, so SSR renders toasts without expiry;
//! hydration replaces the stack before that matters.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u64 = 3500;

/// Queue a toast and schedule its dismissal after [`TOAST_TTL_MS`].
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, title: Option<&str>, message: &str) {
    let mut id = 0;
    toasts.update(|state| {
        id = state.push(kind, title.map(str::to_owned), message.to_owned());
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
        ToastKind::Info => "toast--info",
    }
}

/// Fixed-position stack rendering the queued toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast {}", kind_class(toast.kind))>
                                {toast.title.map(|title| view! { <div class="toast__title">{title}</div> })}
                                <div class="toast__message">{toast.message}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
