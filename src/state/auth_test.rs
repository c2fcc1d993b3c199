use super::*;

use crate::net::types::UserProfile;

fn profile(id: i64) -> UserProfile {
    UserProfile {
        id,
        email: "a@b.com".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Seeding from the persisted session
// =============================================================

#[test]
fn from_empty_session_is_settled_and_anonymous() {
    let state = AuthState::from_session(&Session::default());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn from_full_session_is_settled_with_user() {
    let session = Session {
        access_token: Some("tok1".to_owned()),
        user: Some(profile(1)),
    };
    let state = AuthState::from_session(&session);
    assert_eq!(state.user.map(|u| u.id), Some(1));
    assert!(!state.loading);
}

#[test]
fn token_without_profile_needs_a_me_fetch() {
    let session = Session {
        access_token: Some("tok1".to_owned()),
        user: None,
    };
    let state = AuthState::from_session(&session);
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn profile_without_token_is_not_loading() {
    // A half-cleared session: the guard should treat it as signed out once
    // the startup refresh fails, not spin forever.
    let session = Session {
        access_token: None,
        user: Some(profile(1)),
    };
    let state = AuthState::from_session(&session);
    assert!(!state.loading);
}
