use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on the resolved session state.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    let state = auth.state();
    if !state.loading {
        if state.credential.is_some() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
        return rsx! {};
    }

    rsx! {
        ui::LoadingPlaceholder {}
    }
}
