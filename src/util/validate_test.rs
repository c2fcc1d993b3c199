use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.example.co"));
}

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("example.com"));
}

#[test]
fn rejects_empty_local_or_domain() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
}

#[test]
fn rejects_undotted_domain() {
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("us er@example.com"));
}
