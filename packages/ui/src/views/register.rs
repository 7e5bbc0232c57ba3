//! Registration view. A successful registration does not sign the user in;
//! it hands them back to the login flow.

use api::{AuthOutcome, RegisterRequest};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::use_auth;

#[component]
pub fn RegisterView(
    on_registered: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit_auth = auth.clone();
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = submit_auth.clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let n = full_name().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if u.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            submitting.set(true);
            let request = RegisterRequest {
                username: u,
                email: e,
                password: p,
                full_name: if n.is_empty() { None } else { Some(n) },
            };
            match auth.register(request).await {
                AuthOutcome::Success => on_registered.call(()),
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

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Sign up for Taskdeck" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    placeholder: "Full name (optional)",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                button {
                    class: "link-button",
                    onclick: move |_| on_navigate_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
