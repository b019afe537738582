use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the session wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session identifier.
    pub fn with_user(user_id: &str) -> Self {
        let store = Self::new();
        store.save(user_id);
        store
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, user_id: &str) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = Some(user_id.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = None;
        }
    }
}
