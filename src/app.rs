//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::AppHeader;
use crate::components::toast::ToastHost;
use crate::net::client::ApiClient;
use crate::pages::{checks::ChecksPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::auth::AuthState;
use crate::state::checks::ChecksState;
use crate::state::session::{SessionStore, default_storage};
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;
use crate::util::{config, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Refresh the stored profile from `/v1/auth/me` when a token survived the
/// page load. Failure is quiet: the request client has already cleared the
/// session if the token turned out to be unrecoverable, and the route guard
/// reacts to the user going absent.
fn refresh_current_user(api: &ApiClient, auth: RwSignal<AuthState>) {
    if api.session().access_token().is_none() {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.me().await {
                Ok(user) => auth.update(|state| {
                    state.user = Some(user);
                    state.loading = false;
                }),
                Err(_) => auth.update(|state| {
                    state.loading = false;
                    if api.session().access_token().is_none() {
                        state.user = None;
                    }
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth);
    }
}

/// Root application component.
///
/// Owns the session store and API client, provides all shared state
/// contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::load(default_storage());
    let api = ApiClient::new(config::api_base(), session.clone());
    let auth = RwSignal::new(AuthState::from_session(&session.snapshot()));
    let checks = RwSignal::new(ChecksState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
    });

    dark_mode::apply(ui.get_untracked().dark_mode);
    refresh_current_user(&api, auth);

    // `ApiClient` is `!Send`/`!Sync` (Rc-backed). `provide_context` requires
    // `Send + Sync`, so share it through a `StoredValue` local handle, which is
    // `Send + Sync` and references the same locally-stored client.
    provide_context(StoredValue::new_local(api));
    provide_context(auth);
    provide_context(checks);
    provide_context(toasts);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/pingerus-ui.css"/>
        <Title text="Pingerus"/>

        <Router>
            <AppHeader/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ChecksPage/>
                    <Route path=StaticSegment("checks") view=ChecksPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
