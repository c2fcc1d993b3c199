//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. This is the reactive mirror
//! of [`crate::state::session::SessionStore`]; the store itself stays
//! non-reactive so the request client can mutate it outside the signal
//! graph.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::state::session::Session;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// Seed from the persisted session at startup. `loading` is set only
    /// when a token exists without a usable stored profile, i.e. a
    /// `/v1/auth/me` fetch is still needed before the guards can decide.
    pub fn from_session(session: &Session) -> Self {
        Self {
            loading: session.access_token.is_some() && session.user.is_none(),
            user: session.user.clone(),
        }
    }
}
