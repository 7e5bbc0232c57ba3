//! Durable credential storage for Taskdeck clients.
//!
//! The session keeps at most one bearer token alive at a time; this crate owns
//! where that token lives between page reloads or app restarts. All access goes
//! through the [`TokenStore`] trait, so the same session logic works against an
//! in-memory store (tests, WASM fallback), the browser's `localStorage`
//! (web builds), or a file in the platform data directory (desktop).

mod token;
pub use token::TokenStore;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::LocalTokenStore;
