//! Runtime API configuration.
//!
//! Deployments inject the API origin by assigning
//! `window.__APP_CONFIG__ = { API_BASE: "..." }` before the bundle loads.
//! An unexpanded `${API_BASE}` placeholder (the template shipped verbatim)
//! counts as unset. Empty means same-origin relative requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(any(test, feature = "hydrate"))]
const PLACEHOLDER: &str = "${API_BASE}";

/// Base URL for API requests, without a trailing slash.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        read_runtime_config().unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[cfg(feature = "hydrate")]
fn read_runtime_config() -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("__APP_CONFIG__")).ok()?;
    let base = js_sys::Reflect::get(&config, &JsValue::from_str("API_BASE")).ok()?;
    normalize_api_base(&base.as_string()?)
}

#[cfg(any(test, feature = "hydrate"))]
fn normalize_api_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_owned())
}
