//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the bearer token and the cached user profile in the
//! browser's `localStorage`, so a signed-in session survives page reloads.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A browser with storage disabled
//! degrades to "not signed in" rather than crashing; the backend remains the
//! authority on whether the token is still valid.

use web_sys::Storage;

use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the `Storage` handle is looked up from
/// the window on every operation.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn user(&self) -> Option<String> {
        Self::storage()?.get_item(USER_KEY).ok()?
    }

    fn save(&self, token: &str, user_json: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, user_json);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
