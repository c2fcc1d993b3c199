//! Persistent auth session: access token plus user profile.
//!
//! DESIGN
//! ======
//! The session is an explicitly-owned handle, not an ambient global, so the
//! request client can be constructed against an isolated instance in tests.
//! Token and profile persist under two independent localStorage keys and
//! every mutation writes through immediately, so the in-memory value and
//! the persisted value never drift.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::UserProfile;

/// localStorage key holding the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// localStorage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user_json";

/// Key-value backend the session persists into.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend used in tests and on the server.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Browser localStorage backend. All operations are best-effort; a missing
/// or blocked Storage silently behaves like an empty one.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The storage backend appropriate for the current build: localStorage in
/// the browser, an in-memory map during SSR.
pub fn default_storage() -> Rc<dyn SessionStorage> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryStorage::default())
    }
}

/// Current session value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Cheap-clone handle over the shared session value and its storage backend.
#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Session>>,
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    /// Read both persisted keys from `storage`. A profile that fails to
    /// decode is dropped rather than surfaced.
    pub fn load(storage: Rc<dyn SessionStorage>) -> Self {
        let access_token = storage.get(ACCESS_TOKEN_KEY);
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            session: Rc::new(RefCell::new(Session { access_token, user })),
            storage,
        }
    }

    /// Fresh store over an empty in-memory backend.
    pub fn in_memory() -> Self {
        Self::load(Rc::new(MemoryStorage::default()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.borrow().access_token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.borrow().user.clone()
    }

    /// Copy of the full session value.
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Replace the token, writing through to storage (`None` removes the key).
    pub fn set_access_token(&self, token: Option<String>) {
        match token.as_deref() {
            Some(value) => self.storage.set(ACCESS_TOKEN_KEY, value),
            None => self.storage.remove(ACCESS_TOKEN_KEY),
        }
        self.session.borrow_mut().access_token = token;
    }

    /// Replace the profile, writing through to storage (`None` removes the
    /// key). A profile that cannot be encoded clears the persisted key so
    /// memory and storage stay consistent.
    pub fn set_user(&self, user: Option<UserProfile>) {
        match user.as_ref().and_then(|u| serde_json::to_string(u).ok()) {
            Some(raw) => self.storage.set(USER_KEY, &raw),
            None => self.storage.remove(USER_KEY),
        }
        self.session.borrow_mut().user = user;
    }

    /// Drop token and profile, removing both persisted keys.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.session.borrow_mut() = Session::default();
    }
}
