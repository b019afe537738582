//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps the session in `<base_dir>/session.toml`. It is used on
//! desktop so a user stays signed in across restarts.
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/mesas/` on Linux.

use std::path::PathBuf;

use crate::session::SessionStore;
use crate::session_file::SessionFile;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self) -> PathBuf {
        self.base.join(SessionFile::filename())
    }

    fn write(&self, file: &SessionFile) {
        let text = match file.to_toml() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to encode session file: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.path(), text) {
            tracing::warn!("Failed to write session file: {e}");
        }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.path()).ok()?;
        match SessionFile::from_toml(&content) {
            Ok(file) => file.user_id,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file: {e}");
                None
            }
        }
    }

    fn save(&self, user_id: &str) {
        self.write(&SessionFile::new(user_id));
    }

    fn clear(&self) {
        match std::fs::remove_file(self.path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session file: {e}"),
        }
    }
}
