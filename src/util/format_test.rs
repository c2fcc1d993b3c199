use super::*;

#[test]
fn absent_timestamp_renders_dash() {
    assert_eq!(format_timestamp(None), "—");
}

#[test]
fn blank_timestamp_renders_dash() {
    assert_eq!(format_timestamp(Some("  ")), "—");
}

#[test]
fn timestamp_is_passed_through_outside_the_browser() {
    // Locale formatting needs the browser Date API; the native path keeps
    // the raw ISO string.
    assert_eq!(
        format_timestamp(Some("2026-01-01T00:00:00Z")),
        "2026-01-01T00:00:00Z"
    );
}
