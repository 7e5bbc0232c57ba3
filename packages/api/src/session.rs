//! # Session — the authentication state machine
//!
//! [`Session`] is the single source of truth for "is the user authenticated,
//! and who are they". It owns the bearer credential, the hydrated profile, and
//! the initial `loading` flag, and funnels every mutation through four
//! operations: [`login`](Session::login), [`register`](Session::register),
//! [`logout`](Session::logout), and [`refresh_profile`](Session::refresh_profile).
//!
//! ## Lifecycle
//!
//! ```text
//! Unresolved ──(no stored token)──────────────► Anonymous    loading=false
//!     │
//!     └─(stored token)─► Resolving ─(profile ok)─► Authenticated
//!                            │
//!                            └─(profile rejected)─► Anonymous (token cleared)
//! ```
//!
//! A credential is adopted through a single transition handler
//! ([`adopt_credential`](Session::adopt_credential)) that persists the token,
//! installs it on the request layer, and invalidates any in-flight profile
//! fetch via a generation counter. A logout that races an in-flight fetch
//! therefore wins: the stale result is discarded instead of re-populating the
//! profile.
//!
//! None of the operations panics or throws. Login and register report
//! failures as [`AuthOutcome`] values carrying the server's message (or a
//! generic fallback); a rejected profile fetch silently demotes the session to
//! anonymous, which the route guard turns into a redirect.

use std::cell::{Cell, RefCell};

use store::TokenStore;

use crate::client::{ApiClient, Transport};
use crate::models::{RegisterRequest, TokenResponse, UserInfo};

/// Observable session state. `loading` is true from construction until the
/// first resolution (no stored credential, or the profile fetch settling).
/// `profile` is only ever non-`None` while `credential` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub credential: Option<String>,
    pub profile: Option<UserInfo>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() && self.profile.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            credential: None,
            profile: None,
            loading: true,
        }
    }
}

/// Outcome of a login or register attempt. The error string is already fit
/// for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failed(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthOutcome::Success => None,
            AuthOutcome::Failed(message) => Some(message),
        }
    }
}

/// The session state machine.
///
/// Methods take `&self`: state lives in a `RefCell` because the UI runtime is
/// single-threaded and consumers share the session through an `Rc`. No borrow
/// is held across an await point.
pub struct Session<T: Transport, S: TokenStore> {
    client: ApiClient<T>,
    tokens: S,
    state: RefCell<SessionState>,
    fetch_epoch: Cell<u64>,
}

impl<T: Transport, S: TokenStore> Session<T, S> {
    pub fn new(client: ApiClient<T>, tokens: S) -> Self {
        Self {
            client,
            tokens,
            state: RefCell::new(SessionState::default()),
            fetch_epoch: Cell::new(0),
        }
    }

    /// The request layer, for consumers issuing their own calls (task CRUD).
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Resolve the durable credential, if any. With a stored token the
    /// session enters `Resolving` and hydrates the profile; without one it
    /// settles as anonymous immediately, with no request issued.
    pub async fn initialize(&self) {
        match self.tokens.load() {
            Some(token) => {
                tracing::debug!("stored credential found, resolving profile");
                self.adopt_credential(&token);
                self.refresh_profile().await;
            }
            None => {
                self.state.borrow_mut().loading = false;
            }
        }
    }

    /// Exchange an identifier/secret pair for a credential.
    ///
    /// On success the token is persisted, installed on the request layer, and
    /// the profile hydrated before returning. On failure the existing session
    /// (if any) is left untouched.
    pub async fn login(&self, identifier: &str, secret: &str) -> AuthOutcome {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return AuthOutcome::Failed("Please enter your username".to_string());
        }
        if secret.is_empty() {
            return AuthOutcome::Failed("Please enter your password".to_string());
        }

        let exchange = self
            .client
            .post_form::<TokenResponse>(
                "/auth/login",
                &[("username", identifier), ("password", secret)],
            )
            .await;
        match exchange {
            Ok(token) => {
                self.adopt_credential(&token.access_token);
                self.refresh_profile().await;
                AuthOutcome::Success
            }
            Err(err) => {
                tracing::debug!("login rejected: {err}");
                AuthOutcome::Failed(err.user_message("Login failed"))
            }
        }
    }

    /// Create an account. Success does not authenticate; the caller sends the
    /// user through the login flow afterwards.
    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        match self.client.post_unit("/auth/register", &request).await {
            Ok(()) => AuthOutcome::Success,
            Err(err) => {
                tracing::debug!("registration rejected: {err}");
                AuthOutcome::Failed(err.user_message("Registration failed"))
            }
        }
    }

    /// Drop the session: credential, profile, durable token, and the request
    /// layer's header. Synchronous and infallible.
    pub fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.credential = None;
            state.profile = None;
            state.loading = false;
        }
        self.tokens.clear();
        self.client.clear_token();
        self.fetch_epoch.set(self.fetch_epoch.get() + 1);
    }

    /// Fetch the current user's profile with the active credential.
    ///
    /// A rejected fetch means the credential is no longer valid: the session
    /// performs the effects of [`logout`](Session::logout) and stays silent;
    /// the route guard handles the redirect. A result arriving after the
    /// credential changed underneath it is discarded.
    pub async fn refresh_profile(&self) {
        if self.state.borrow().credential.is_none() {
            self.state.borrow_mut().loading = false;
            return;
        }

        let epoch = self.fetch_epoch.get();
        let result = self.client.get::<UserInfo>("/users/me", &[]).await;
        if self.fetch_epoch.get() != epoch {
            tracing::debug!("discarding profile fetch for a superseded credential");
            return;
        }

        match result {
            Ok(profile) => {
                let mut state = self.state.borrow_mut();
                state.profile = Some(profile);
                state.loading = false;
            }
            Err(err) => {
                tracing::warn!("profile fetch failed, clearing session: {err}");
                self.logout();
            }
        }
    }

    /// Transition handler for the credential becoming non-null: persist it,
    /// attach it to outgoing requests, and invalidate any in-flight fetch.
    fn adopt_credential(&self, token: &str) {
        self.state.borrow_mut().credential = Some(token.to_string());
        self.tokens.save(token);
        self.client.set_token(token);
        self.fetch_epoch.set(self.fetch_epoch.get() + 1);
    }
}
