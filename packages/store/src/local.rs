//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform. The
//! identifier lives under [`SESSION_KEY`] in `window.localStorage`, so it is
//! shared by every tab of the same origin.
//!
//! Storage can be unavailable (private mode, disabled cookies). In that case
//! reads return `None` and writes are dropped with a warning.

use crate::session::{SessionStore, SESSION_KEY};

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, user_id: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        if storage.set_item(SESSION_KEY, user_id).is_err() {
            tracing::warn!("Failed to write {SESSION_KEY} to localStorage");
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not cleared");
            return;
        };
        if storage.remove_item(SESSION_KEY).is_err() {
            tracing::warn!("Failed to remove {SESSION_KEY} from localStorage");
        }
    }
}
