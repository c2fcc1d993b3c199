//! Sign-up page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::validate::is_valid_email;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

fn validate_sign_up_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err("Password is too long.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn sign_up_failed_message(error: &ApiError) -> String {
    let message = error.display_message();
    if message.is_empty() {
        "Could not create the account. Try another email.".to_owned()
    } else {
        message
    }
}

/// Account creation. The server signs the new user in directly, so the
/// success path is identical to [`crate::pages::sign_in::SignInPage`].
#[component]
pub fn SignUpPage() -> impl IntoView {
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
            match validate_sign_up_input(&email.get(), &password.get()) {
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
                match api.sign_up(&email_value, &password_value).await {
                    Ok(data) => {
                        auth.update(|state| {
                            state.user = Some(data.user);
                            state.loading = false;
                        });
                        navigate("/checks", NavigateOptions::default());
                    }
                    Err(error) => {
                        form_error.set(sign_up_failed_message(&error));
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
                <h1>"Create account"</h1>
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
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Continue" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <a href="/sign-in">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
