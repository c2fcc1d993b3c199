//! Timestamp display formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an optional ISO 8601 timestamp for card display.
///
/// Absent values render as an em dash; unparseable values fall back to the
/// raw string rather than an error.
pub fn format_timestamp(iso: Option<&str>) -> String {
    match iso {
        None => "—".to_owned(),
        Some(raw) if raw.trim().is_empty() => "—".to_owned(),
        Some(raw) => locale_time(raw),
    }
}

#[cfg(feature = "hydrate")]
fn locale_time(raw: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_owned();
    }
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(feature = "hydrate"))]
fn locale_time(raw: &str) -> String {
    raw.to_owned()
}
