use crate::token::TokenStore;

const TOKEN_KEY: &str = "taskdeck.token";

/// `localStorage`-backed TokenStore for web builds.
///
/// The token survives page reloads and tab closes. When `localStorage` is
/// unavailable (private browsing with storage disabled), every operation
/// behaves as if the store were empty.
#[derive(Clone, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
