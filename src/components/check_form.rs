//! Validated URL + interval form used by the create and edit dialogs.

#[cfg(test)]
#[path = "check_form_test.rs"]
mod check_form_test;

use leptos::prelude::*;

use crate::net::types::Check;

/// Smallest accepted probe interval.
pub const MIN_INTERVAL_SEC: i64 = 10;
/// Largest accepted probe interval (one day).
pub const MAX_INTERVAL_SEC: i64 = 86_400;
/// Interval pre-filled for new checks.
pub const DEFAULT_INTERVAL_SEC: i64 = 60;
/// Upper bound on probed URL length.
pub const MAX_URL_LEN: usize = 2048;

fn validate_check_input(url: &str, interval: &str) -> Result<(String, i64), &'static str> {
    let url = url.trim();
    let scheme_ok = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
    match scheme_ok {
        None => return Err("Enter a valid http(s) URL."),
        Some(rest) if rest.is_empty() => return Err("Enter a valid http(s) URL."),
        Some(_) => {}
    }
    if url.len() > MAX_URL_LEN {
        return Err("URL is too long.");
    }
    let interval: i64 = interval
        .trim()
        .parse()
        .map_err(|_| "Interval must be a whole number of seconds.")?;
    if !(MIN_INTERVAL_SEC..=MAX_INTERVAL_SEC).contains(&interval) {
        return Err("Interval must be between 10 and 86400 seconds.");
    }
    Ok((url.to_owned(), interval))
}

/// Form body for creating or editing a check. `initial` switches the form
/// into edit mode; submission only fires with validated values.
#[component]
pub fn CheckForm(
    #[prop(optional)] initial: Option<Check>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<(String, i64)>,
) -> impl IntoView {
    let editing = initial.is_some();
    let url = RwSignal::new(initial.as_ref().map(|c| c.url.clone()).unwrap_or_default());
    let interval = RwSignal::new(
        initial
            .as_ref()
            .map_or(DEFAULT_INTERVAL_SEC, |c| c.interval_sec)
            .to_string(),
    );
    let form_error = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_check_input(&url.get(), &interval.get()) {
            Ok((url_value, interval_value)) => {
                form_error.set(String::new());
                on_submit.run((url_value, interval_value));
            }
            Err(message) => form_error.set(message.to_owned()),
        }
    };

    view! {
        <form class="check-form" on:submit=submit>
            <label class="dialog__label">
                "URL"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="https://example.com/health"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Interval (sec)"
                <input
                    class="dialog__input"
                    type="number"
                    min=MIN_INTERVAL_SEC.to_string()
                    max=MAX_INTERVAL_SEC.to_string()
                    prop:value=move || interval.get()
                    on:input=move |ev| interval.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !form_error.get().is_empty()>
                <p class="check-form__error">{move || form_error.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() {
                        "Saving..."
                    } else if editing {
                        "Save changes"
                    } else {
                        "Create check"
                    }
                }}
            </button>
        </form>
    }
}
