//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] persists the session token to a single file so desktop
//! builds stay signed in across app restarts.
//!
//! ## Platform data directories
//!
//! [`FileTokenStore::in_data_dir`] uses [`dirs::data_dir()`] for a
//! platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/taskdeck/token` |
//! | Linux | `~/.local/share/taskdeck/token` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\taskdeck\token` |

use std::path::PathBuf;

use crate::token::TokenStore;

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store under the platform data directory, falling back to the current
    /// directory when none is available.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskdeck");
        Self::new(base)
    }

    fn token_path(&self) -> PathBuf {
        self.base.join("token")
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileTokenStore {
        let dir = std::env::temp_dir().join(format!("taskdeck_test_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        FileTokenStore::new(dir)
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = temp_store("roundtrip");
        assert!(store.load().is_none());

        store.save("tok123");
        assert_eq!(store.load().as_deref(), Some("tok123"));

        // Re-open from the same directory
        let reopened = FileTokenStore::new(store.base.clone());
        assert_eq!(reopened.load().as_deref(), Some("tok123"));

        store.clear();
        assert!(store.load().is_none());
        assert!(reopened.load().is_none());
    }

    #[test]
    fn test_clear_without_token_is_noop() {
        let store = temp_store("clear_noop");
        store.clear();
        assert!(store.load().is_none());
    }
}
