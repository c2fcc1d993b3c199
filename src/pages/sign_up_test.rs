use super::*;

#[test]
fn validate_sign_up_input_accepts_boundary_lengths() {
    assert!(validate_sign_up_input("a@b.com", &"x".repeat(8)).is_ok());
    assert!(validate_sign_up_input("a@b.com", &"x".repeat(128)).is_ok());
}

#[test]
fn validate_sign_up_input_rejects_short_password() {
    assert_eq!(
        validate_sign_up_input("a@b.com", &"x".repeat(7)),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_sign_up_input_rejects_long_password() {
    assert_eq!(
        validate_sign_up_input("a@b.com", &"x".repeat(129)),
        Err("Password is too long.")
    );
}

#[test]
fn validate_sign_up_input_rejects_bad_email() {
    assert_eq!(
        validate_sign_up_input("a@", "password1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn sign_up_failed_message_falls_back_when_empty() {
    let error = ApiError::Transport(String::new());
    assert_eq!(
        sign_up_failed_message(&error),
        "Could not create the account. Try another email."
    );
}
