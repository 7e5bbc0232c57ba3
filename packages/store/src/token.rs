/// Storage for the single session credential.
///
/// Implementations hold zero or one token. `save` replaces any previous value;
/// `clear` is a no-op when nothing is stored. All methods are synchronous and
/// infallible: a backend that cannot persist (e.g. `localStorage` disabled)
/// degrades to behaving like an empty store.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}
