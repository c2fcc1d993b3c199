use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_rejects_bad_email() {
    assert_eq!(
        validate_sign_in_input("not-an-email", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_sign_in_input_requires_password() {
    assert_eq!(
        validate_sign_in_input("user@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn sign_in_failed_message_uses_error_text() {
    let error = ApiError::Http {
        status: 401,
        message: "bad credentials".to_owned(),
    };
    assert_eq!(sign_in_failed_message(&error), "bad credentials");
}

#[test]
fn sign_in_failed_message_falls_back_when_empty() {
    let error = ApiError::Transport(String::new());
    assert_eq!(
        sign_in_failed_message(&error),
        "Could not sign in. Check your email and password."
    );
}
