//! Persisted client state.
//!
//! The only state the client keeps between page loads is the identifier of
//! the signed-in user. [`SessionStore`] abstracts where it lives so the same
//! session logic runs in the browser, on the desktop and in tests.

pub mod session_file;

mod session;
pub use session::{SessionStore, SESSION_KEY};

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use session_file::SessionFile;
