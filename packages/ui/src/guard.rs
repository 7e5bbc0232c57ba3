//! Route-guard decision for protected views.
//!
//! The decision is a pure function of the session state; the platform
//! launchers own the actual redirect because only they know their route type.

use api::SessionState;
use dioxus::prelude::*;

/// What a protected view should render for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Initial resolution still in flight; render a placeholder and nothing else.
    Placeholder,
    /// No credential; replace the current history entry with the login view.
    RedirectToLogin,
    /// Credential present; render the protected children.
    Render,
}

pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Placeholder
    } else if state.credential.is_none() {
        GuardOutcome::RedirectToLogin
    } else {
        GuardOutcome::Render
    }
}

/// Full-screen placeholder shown while the session resolves.
#[component]
pub fn LoadingPlaceholder() -> Element {
    rsx! {
        div { class: "guard-loading", "Loading..." }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(loading: bool, credential: Option<&str>) -> SessionState {
        SessionState {
            credential: credential.map(str::to_string),
            profile: None,
            loading,
        }
    }

    #[test]
    fn test_placeholder_while_loading() {
        assert_eq!(guard_outcome(&state(true, None)), GuardOutcome::Placeholder);
        assert_eq!(
            guard_outcome(&state(true, Some("tok"))),
            GuardOutcome::Placeholder
        );
    }

    #[test]
    fn test_redirect_when_resolved_without_credential() {
        assert_eq!(
            guard_outcome(&state(false, None)),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn test_render_when_resolved_with_credential() {
        assert_eq!(guard_outcome(&state(false, Some("tok"))), GuardOutcome::Render);
    }
}
