//! Small shared form components.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = false)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    // Raw identifiers cannot appear in format strings
    let kind = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{kind}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let kind = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default = String::new())] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The `type` attribute comes in as a raw identifier prop; make sure both
    // components actually render with a non-default value.
    #[test]
    fn test_button_and_input_render_with_custom_type_attribute() {
        fn app() -> Element {
            rsx! {
                Button { r#type: "submit", "Save" }
                Input { r#type: "password", placeholder: "Password" }
                Label { html_for: "field", "Field" }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
