//! Login view with username/password form.

use api::AuthOutcome;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::use_auth;

/// Login form. `on_authenticated` fires after a successful sign-in (and when
/// an already-authenticated user lands here); `on_navigate_register` wires
/// the sign-up link.
#[component]
pub fn LoginView(
    on_authenticated: EventHandler<()>,
    on_navigate_register: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in; skip the form
    let state = auth.state();
    if !state.loading && state.credential.is_some() {
        on_authenticated.call(());
    }

    let submit_auth = auth.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = submit_auth.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);

            match auth.login(&username(), &password()).await {
                AuthOutcome::Success => on_authenticated.call(()),
                AuthOutcome::Failed(message) => {
                    submitting.set(false);
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Taskdeck" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_register.call(()),
                    "Sign up"
                }
            }
        }
    }
}
