//! Application header: brand, nav, theme toggle, session actions.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Sticky top bar. Shows the signed-in user's email and a logout action,
/// or sign-in/sign-up links for anonymous visitors.
#[component]
pub fn AppHeader() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient, LocalStorage>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_email = move || {
        auth.get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                // Session is cleared by logout() even when the server fails.
                let _ = api.logout().await;
                auth.update(|state| state.user = None);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/sign-in");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <header class="app-header toolbar">
            <a class="app-header__brand" href="/">"Pingerus"</a>
            <Show when=move || auth.get().user.is_some()>
                <a class="btn app-header__nav-link" href="/checks">"Checks"</a>
            </Show>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = dark_mode::toggle(current);
                    ui.update(|state| state.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <a class="btn" href="/sign-in">"Sign In"</a>
                        <a class="btn" href="/sign-up">"Sign Up"</a>
                    }
                }
            >
                <span class="app-header__self">{user_email}</span>
                <button class="btn app-header__logout" on:click=move |_| on_logout.run(()) title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
