//! Reusable card component for check list items.
//!
//! DESIGN
//! ======
//! Keeps per-check presentation (status badge, interval, timestamps,
//! actions) in one place so the grid stays declarative.

#[cfg(test)]
#[path = "check_card_test.rs"]
mod check_card_test;

use leptos::prelude::*;

use crate::net::types::Check;
use crate::util::format::format_timestamp;

/// Badge text for the last probe outcome. Unknown (never probed) renders as
/// an em dash.
pub fn status_label(last_status: Option<bool>) -> &'static str {
    match last_status {
        None => "—",
        Some(true) => "UP",
        Some(false) => "DOWN",
    }
}

fn status_class(last_status: Option<bool>) -> &'static str {
    match last_status {
        None => "check-card__status--unknown",
        Some(true) => "check-card__status--up",
        Some(false) => "check-card__status--down",
    }
}

/// A card representing one check, with edit and delete affordances.
#[component]
pub fn CheckCard(
    check: Check,
    busy: Signal<bool>,
    on_edit: Callback<Check>,
    on_delete: Callback<Check>,
) -> impl IntoView {
    let edit_check = check.clone();
    let delete_check = check.clone();
    let next_run = format_timestamp(check.next_run.as_deref());
    let updated_at = format_timestamp(check.updated_at.as_deref());

    view! {
        <div class="check-card">
            <div class="check-card__meta">
                <span class="check-card__id">{format!("#{}", check.id)}</span>
                <span class=format!("check-card__status {}", status_class(check.last_status))>
                    {status_label(check.last_status)}
                </span>
            </div>
            <div class="check-card__url">{check.url.clone()}</div>
            <div class="check-card__row">
                <span>"Interval"</span>
                <span class="check-card__value">{format!("{}s", check.interval_sec)}</span>
            </div>
            <div class="check-card__row check-card__row--dim">
                <span>"Next run"</span>
                <span>{next_run}</span>
            </div>
            <div class="check-card__row check-card__row--dim">
                <span>"Updated"</span>
                <span>{updated_at}</span>
            </div>
            <div class="check-card__actions">
                <button
                    class="btn"
                    on:click=move |_| on_edit.run(edit_check.clone())
                    disabled=move || busy.get()
                >
                    "Edit"
                </button>
                <button
                    class="btn"
                    on:click=move |_| on_delete.run(delete_check.clone())
                    disabled=move || busy.get()
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
