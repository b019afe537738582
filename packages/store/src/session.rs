/// Fixed key the session identifier is stored under.
pub const SESSION_KEY: &str = "userId";

/// Storage for the single persisted session value.
///
/// Implementations swallow their own I/O errors: a backend that cannot be
/// read behaves as if no session was stored, and a failed write is logged
/// and otherwise ignored.
pub trait SessionStore {
    /// Read the persisted user identifier, if any.
    fn load(&self) -> Option<String>;
    /// Persist a user identifier, replacing any previous value.
    fn save(&self, user_id: &str);
    /// Remove the persisted identifier.
    fn clear(&self);
}
