//! # Session gate
//!
//! A two-state machine over the persisted user identifier:
//! [`Gate::Anonymous`] → [`Gate::Authenticated`] on sign-in, and back on
//! sign-out or account deletion.
//!
//! [`Session`] owns the [`SessionStore`] and is the only writer. Pages
//! declare an [`Access`] level and ask [`Gate::check`] whether they must
//! redirect before doing anything else.

use store::SessionStore;

/// Where a page sends the user when the gate refuses entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

/// Who may see a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Signed-in users only.
    Authenticated,
    /// Anonymous users only (login, registration).
    GuestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Anonymous,
    Authenticated { user_id: String },
}

impl Gate {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Gate::Anonymous => None,
            Gate::Authenticated { user_id } => Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Gate::Authenticated { .. })
    }

    /// Decide whether a page with the given access level may render.
    pub fn check(&self, access: Access) -> Result<(), Redirect> {
        match (access, self) {
            (Access::Authenticated, Gate::Anonymous) => Err(Redirect::Login),
            (Access::GuestOnly, Gate::Authenticated { .. }) => Err(Redirect::Home),
            _ => Ok(()),
        }
    }
}

/// The signed-in user, backed by persistent storage.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    user_id: Option<String>,
}

impl<S: SessionStore> Session<S> {
    /// Read the persisted identifier once.
    pub fn restore(store: S) -> Self {
        let user_id = store.load().filter(|id| !id.is_empty());
        Self { store, user_id }
    }

    pub fn gate(&self) -> Gate {
        match &self.user_id {
            Some(user_id) => Gate::Authenticated {
                user_id: user_id.clone(),
            },
            None => Gate::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Persist `user_id` and become authenticated. An empty identifier is
    /// refused and leaves the session unchanged.
    pub fn sign_in(&mut self, user_id: &str) {
        if user_id.is_empty() {
            tracing::warn!("Refusing to sign in with an empty user id");
            return;
        }
        self.store.save(user_id);
        self.user_id = Some(user_id.to_string());
        tracing::info!("Signed in as {user_id}");
    }

    /// Clear storage and become anonymous.
    pub fn sign_out(&mut self) {
        self.store.clear();
        if let Some(id) = self.user_id.take() {
            tracing::info!("Signed out {id}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_restore_without_identifier_is_anonymous() {
        let session = Session::restore(MemoryStore::new());
        assert_eq!(session.gate(), Gate::Anonymous);
        assert_eq!(
            session.gate().check(Access::Authenticated),
            Err(Redirect::Login)
        );
        assert_eq!(session.gate().check(Access::GuestOnly), Ok(()));
    }

    #[test]
    fn test_restore_with_identifier_is_authenticated() {
        let session = Session::restore(MemoryStore::with_user("42"));
        assert_eq!(session.user_id(), Some("42"));
        assert_eq!(session.gate().check(Access::Authenticated), Ok(()));
        assert_eq!(session.gate().check(Access::GuestOnly), Err(Redirect::Home));
        assert_eq!(session.gate().check(Access::Public), Ok(()));
    }

    #[test]
    fn test_sign_in_and_out_persist() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone());

        session.sign_in("7");
        assert_eq!(store.load(), Some("7".to_string()));
        assert!(session.gate().is_authenticated());

        session.sign_out();
        assert!(store.load().is_none());
        assert_eq!(session.gate(), Gate::Anonymous);
    }

    #[test]
    fn test_empty_identifier_is_anonymous() {
        let store = MemoryStore::with_user("");
        let mut session = Session::restore(store.clone());
        assert_eq!(session.gate(), Gate::Anonymous);

        session.sign_in("");
        assert_eq!(session.gate(), Gate::Anonymous);
        assert_eq!(store.load(), Some(String::new()));
    }
}
