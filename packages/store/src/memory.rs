use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and as a WASM fallback.
///
/// Clones share the same slot, so a store handed to the session and one held
/// by a test observe the same token.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token, as if a previous session had stored one.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save("tok123");
        assert_eq!(store.load().as_deref(), Some("tok123"));

        store.save("tok456");
        assert_eq!(store.load().as_deref(), Some("tok456"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryTokenStore::new();
        let other = store.clone();

        store.save("shared");
        assert_eq!(other.load().as_deref(), Some("shared"));

        other.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_with_token() {
        let store = MemoryTokenStore::with_token("seeded");
        assert_eq!(store.load().as_deref(), Some("seeded"));
    }
}
