//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`Session`] instance for the whole app and
//! mirrors its state into a signal after every operation. Components read the
//! state and call the session operations through the [`Auth`] handle from
//! [`use_auth`]; nothing mutates the session any other way.

use std::rc::Rc;

use api::{ApiClient, ApiConfig, AuthOutcome, PlatformTransport, RegisterRequest, Session, SessionState};
use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type PlatformTokenStore = store::LocalTokenStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
type PlatformTokenStore = store::MemoryTokenStore;
#[cfg(not(target_arch = "wasm32"))]
type PlatformTokenStore = store::FileTokenStore;

/// The session type instantiated for the current platform.
pub type AppSession = Session<PlatformTransport, PlatformTokenStore>;

fn make_session() -> AppSession {
    let client = ApiClient::new(ApiConfig::from_env(), PlatformTransport::new());
    Session::new(client, platform_token_store())
}

fn platform_token_store() -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalTokenStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileTokenStore::in_data_dir()
    }
}

/// Shared handle to the session. Cheap to clone; every clone talks to the
/// same state machine and the same state signal.
#[derive(Clone)]
pub struct Auth {
    session: Rc<AppSession>,
    state: Signal<SessionState>,
}

impl Auth {
    /// Current session state. Reading it inside a component subscribes that
    /// component to session updates.
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    /// The underlying session, for consumers that issue their own requests
    /// through its client (task CRUD).
    pub fn session(&self) -> &AppSession {
        &self.session
    }

    pub async fn initialize(&self) {
        self.session.initialize().await;
        self.sync();
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> AuthOutcome {
        let outcome = self.session.login(identifier, secret).await;
        self.sync();
        outcome
    }

    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        let outcome = self.session.register(request).await;
        self.sync();
        outcome
    }

    pub fn logout(&self) {
        self.session.logout();
        self.sync();
    }

    pub async fn refresh_profile(&self) {
        self.session.refresh_profile().await;
        self.sync();
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.session.snapshot());
    }
}

/// Get the current authentication handle.
/// Panics when called outside an [`AuthProvider`].
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let auth = use_context_provider(|| Auth {
        session: Rc::new(make_session()),
        state,
    });

    // Resolve the durable credential on mount
    let hydrate = auth.clone();
    let _ = use_resource(move || {
        let auth = hydrate.clone();
        async move {
            auth.initialize().await;
        }
    });

    rsx! {
        {children}
    }
}
