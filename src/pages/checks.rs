//! Checks page: card grid with search, create/edit dialogs, and delete
//! confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the signed-in user's
//! checks once auth settles and mutates the list optimistically where the
//! server contract allows it (delete rolls back on failure).

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::check_card::CheckCard;
use crate::components::check_form::CheckForm;
use crate::components::confirm::ConfirmDialog;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Check;
use crate::state::auth::AuthState;
use crate::state::checks::ChecksState;
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;

fn filter_checks(items: &[Check], query: &str) -> Vec<Check> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|check| check.url.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn replace_check(items: &mut [Check], updated: &Check) {
    if let Some(slot) = items.iter_mut().find(|check| check.id == updated.id) {
        *slot = updated.clone();
    }
}

fn remove_check(items: &mut Vec<Check>, id: i64) -> Option<Check> {
    let index = items.iter().position(|check| check.id == id)?;
    Some(items.remove(index))
}

/// Undo an optimistic removal, keeping the grid in id order.
fn restore_check(items: &mut Vec<Check>, check: Check) {
    items.push(check);
    items.sort_by_key(|check| check.id);
}

fn failure_message(error: &ApiError, fallback: &str) -> String {
    let message = error.display_message();
    if message.is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}

fn load_checks(
    api: &ApiClient,
    auth: RwSignal<AuthState>,
    checks: RwSignal<ChecksState>,
    toasts: RwSignal<ToastState>,
    user_id: i64,
) {
    checks.update(|state| {
        state.loading = true;
        state.error = None;
    });
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_checks(user_id).await {
                Ok(items) => checks.update(|state| {
                    state.items = items;
                    state.loading = false;
                }),
                Err(error) => {
                    let message = failure_message(&error, "Failed to load checks");
                    checks.update(|state| {
                        state.loading = false;
                        state.error = Some(message.clone());
                    });
                    toast::show(toasts, ToastKind::Error, Some("Load error"), &message);
                    // A failed token refresh cleared the session; let the
                    // route guard send us back to sign-in.
                    if api.session().access_token().is_none() {
                        auth.update(|state| state.user = None);
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth, toasts, user_id);
        checks.update(|state| state.loading = false);
    }
}

/// Checks page: list, search, and CRUD dialogs for the current user's
/// checks. Redirects to `/sign-in` if the user is not authenticated.
#[component]
pub fn ChecksPage() -> impl IntoView {
    // The API client is `!Send`/`!Sync` (Rc-backed); it is shared via a
    // `StoredValue` local handle (see `app.rs`), which is `Send + Sync` and so
    // can be captured by `Callback`/`Effect` closures.
    let api = expect_context::<StoredValue<ApiClient, LocalStorage>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let checks = expect_context::<RwSignal<ChecksState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    // Load once auth has settled on a user.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            return;
        };
        requested.set(true);
        api.with_value(|api| load_checks(api, auth, checks, toasts, user.id));
    });

    let submitting = Signal::derive(move || checks.get().submitting);

    let show_create = RwSignal::new(false);
    let edit_target = RwSignal::new(None::<Check>);
    let delete_target = RwSignal::new(None::<Check>);

    let on_refresh = Callback::new(move |()| {
        if let Some(user) = auth.get_untracked().user {
            api.with_value(|api| load_checks(api, auth, checks, toasts, user.id));
        }
    });

    let on_edit_open = Callback::new(move |check: Check| edit_target.set(Some(check)));
    let on_delete_open = Callback::new(move |check: Check| delete_target.set(Some(check)));

    let on_create_close = Callback::new(move |()| {
        if !checks.get_untracked().submitting {
            show_create.set(false);
        }
    });
    let on_edit_close = Callback::new(move |()| {
        if !checks.get_untracked().submitting {
            edit_target.set(None);
        }
    });
    let on_delete_close = Callback::new(move |()| {
        if !checks.get_untracked().submitting {
            delete_target.set(None);
        }
    });

    let on_create_submit = Callback::new(move |(url, interval_sec): (String, i64)| {
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        checks.update(|state| state.submitting = true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.create_check(user.id, &url, interval_sec).await {
                    Ok(created) => {
                        checks.update(|state| {
                            state.items.insert(0, created);
                            state.submitting = false;
                        });
                        show_create.set(false);
                        toast::show(toasts, ToastKind::Success, None, "Check created");
                    }
                    Err(error) => {
                        checks.update(|state| state.submitting = false);
                        toast::show(
                            toasts,
                            ToastKind::Error,
                            None,
                            &failure_message(&error, "Create failed"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, url, interval_sec, user);
            checks.update(|state| state.submitting = false);
        }
    });

    let on_edit_submit = Callback::new(move |(url, interval_sec): (String, i64)| {
        let Some(existing) = edit_target.get_untracked() else {
            return;
        };
        checks.update(|state| state.submitting = true);
        let updated = Check {
            url,
            interval_sec,
            ..existing
        };
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.update_check(&updated).await {
                    Ok(saved) => {
                        checks.update(|state| {
                            replace_check(&mut state.items, &saved);
                            state.submitting = false;
                        });
                        edit_target.set(None);
                        toast::show(toasts, ToastKind::Success, None, "Changes saved");
                    }
                    Err(error) => {
                        checks.update(|state| state.submitting = false);
                        toast::show(
                            toasts,
                            ToastKind::Error,
                            None,
                            &failure_message(&error, "Update failed"),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, updated);
            checks.update(|state| state.submitting = false);
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(victim) = delete_target.get_untracked() else {
            return;
        };
        // Optimistic removal; the failure path restores the card.
        checks.update(|state| {
            state.submitting = true;
            let _ = remove_check(&mut state.items, victim.id);
        });
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.delete_check(victim.id).await {
                    Ok(()) => {
                        checks.update(|state| state.submitting = false);
                        toast::show(
                            toasts,
                            ToastKind::Info,
                            None,
                            &format!("Check #{} deleted", victim.id),
                        );
                    }
                    Err(error) => {
                        let message = failure_message(&error, "Delete failed");
                        checks.update(|state| {
                            restore_check(&mut state.items, victim);
                            state.submitting = false;
                        });
                        toast::show(toasts, ToastKind::Error, None, &message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, victim);
            checks.update(|state| state.submitting = false);
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="checks-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to sign-in..." }}</p>
                    </div>
                }
            }
        >
            <div class="checks-page">
                <div class="checks-page__toolbar">
                    <h1>"Checks"</h1>
                    <span class="toolbar__spacer"></span>
                    <input
                        class="dialog__input checks-page__search"
                        type="text"
                        placeholder="Search URL…"
                        prop:value=move || checks.get().query
                        on:input=move |ev| checks.update(|state| state.query = event_target_value(&ev))
                    />
                    <span class="checks-page__count">
                        {move || {
                            let state = checks.get();
                            format!("({})", filter_checks(&state.items, &state.query).len())
                        }}
                    </span>
                    <button class="btn" on:click=move |_| on_refresh.run(())>
                        "Refresh now"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "New Check"
                    </button>
                </div>

                <Show when=move || checks.get().error.is_some()>
                    <p class="checks-page__error">{move || checks.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !checks.get().loading
                    fallback=move || view! { <p class="checks-page__loading">"Loading checks..."</p> }
                >
                    <Show when=move || {
                        let state = checks.get();
                        filter_checks(&state.items, &state.query).is_empty()
                    }>
                        <div class="checks-page__empty">
                            <p>"No checks match yet."</p>
                            <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                "Create the first one"
                            </button>
                        </div>
                    </Show>
                    <div class="checks-page__grid">
                        {move || {
                            let state = checks.get();
                            filter_checks(&state.items, &state.query)
                                .into_iter()
                                .map(|check| {
                                    view! {
                                        <CheckCard
                                            check=check
                                            busy=submitting
                                            on_edit=on_edit_open
                                            on_delete=on_delete_open
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || show_create.get()>
                    <Modal title="Create Check" on_close=on_create_close>
                        <CheckForm busy=submitting on_submit=on_create_submit/>
                    </Modal>
                </Show>

                <Show when=move || edit_target.get().is_some()>
                    {move || {
                        edit_target
                            .get()
                            .map(|check| {
                                let title = format!("Edit Check #{}", check.id);
                                view! {
                                    <Modal title=title on_close=on_edit_close>
                                        <CheckForm
                                            initial=check
                                            busy=submitting
                                            on_submit=on_edit_submit
                                        />
                                    </Modal>
                                }
                            })
                    }}
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    {move || {
                        delete_target
                            .get()
                            .map(|check| {
                                let title = format!("Delete Check #{}", check.id);
                                let message = format!("Delete check \"{}\"?", check.url);
                                view! {
                                    <ConfirmDialog
                                        title=title
                                        message=message
                                        busy=submitting
                                        on_confirm=on_delete_confirm
                                        on_cancel=on_delete_close
                                    />
                                }
                            })
                    }}
                </Show>
            </div>
        </Show>
    }
}
