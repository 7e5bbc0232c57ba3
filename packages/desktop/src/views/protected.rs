use dioxus::prelude::*;
use ui::{guard_outcome, use_auth, GuardOutcome, LoadingPlaceholder};

use crate::Route;

/// Renders its children only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match guard_outcome(&auth.state()) {
        GuardOutcome::Placeholder => rsx! { LoadingPlaceholder {} },
        GuardOutcome::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::Render => rsx! { {children} },
    }
}
