//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the dark mode preference from localStorage.
///
/// Dark is the default; only an explicit stored `"light"` opts out.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        preference_from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn preference_from_stored(stored: Option<&str>) -> bool {
    stored != Some("light")
}

/// Apply the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force("dark", enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
