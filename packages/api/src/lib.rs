//! # API crate — request layer and session state machine for Taskdeck
//!
//! This crate owns everything between the UI and the backend REST API: the
//! HTTP client, the wire models, the error taxonomy, and the session state
//! machine that decides whether the user is authenticated.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` HTTP verbs over the [`Transport`] trait; attaches the bearer credential to every request while one is set |
//! | [`transport`] | Platform transports: `gloo-net` on WASM, `reqwest` on native |
//! | [`session`] | [`Session`] state machine: credential lifecycle, profile hydration, logout |
//! | [`tasks`] | Typed task endpoints and the optimistic cache patch helpers |
//! | [`models`] | Wire models (`UserInfo`, `Task`, request payloads) |
//! | [`error`] | [`ApiError`] taxonomy and user-facing message fallbacks |
//! | [`config`] | Backend base URL resolution |
//!
//! ## Failure policy
//!
//! Authentication operations report failures as [`AuthOutcome`] values for the
//! caller to display. A rejected profile fetch silently demotes the session to
//! anonymous (the route guard then redirects). Task endpoints return plain
//! [`Result`]s and leave presentation to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tasks;
pub mod transport;

pub use client::{ApiClient, HttpRequest, HttpResponse, Method, RequestBody, Transport};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{RegisterRequest, Task, TaskCreate, TaskUpdate, TokenResponse, UserInfo};
pub use session::{AuthOutcome, Session, SessionState};
pub use tasks::{apply_created, apply_removed, apply_updated};
pub use transport::PlatformTransport;

#[cfg(test)]
pub(crate) mod testing;
