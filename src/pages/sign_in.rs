//! Sign-in page.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::validate::is_valid_email;

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn sign_in_failed_message(error: &ApiError) -> String {
    let message = error.display_message();
    if message.is_empty() {
        "Could not sign in. Check your email and password.".to_owned()
    } else {
        message
    }
}

/// Email + password sign-in. A successful response seeds the session store
/// (inside the API client) and the reactive auth state, then navigates to
/// the checks page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient, LocalStorage>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    form_error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.sign_in(&email_value, &password_value).await {
                    Ok(data) => {
                        auth.update(|state| {
                            state.user = Some(data.user);
                            state.loading = false;
                        });
                        navigate("/checks", NavigateOptions::default());
                    }
                    Err(error) => {
                        form_error.set(sign_in_failed_message(&error));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-card__error">{move || form_error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Continue" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account? "
                    <a href="/sign-up">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
