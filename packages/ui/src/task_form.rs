use api::Task;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// Values collected by the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormData {
    pub title: String,
    pub description: Option<String>,
}

/// Modal form for creating a task, or editing one when `task` is set.
#[component]
pub fn TaskForm(
    task: Option<Task>,
    on_submit: EventHandler<TaskFormData>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = task.is_some();
    let initial_title = task.as_ref().map(|t| t.title.clone()).unwrap_or_default();
    let initial_description = task
        .as_ref()
        .and_then(|t| t.description.clone())
        .unwrap_or_default();

    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let t = title().trim().to_string();
        if t.is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        let d = description().trim().to_string();

        on_submit.call(TaskFormData {
            title: t,
            description: if d.is_empty() { None } else { Some(d) },
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal-card",
                h2 {
                    class: "modal-title",
                    if editing { "Edit Task" } else { "New Task" }
                }

                form {
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "task-title", "Title" }
                        Input {
                            id: "task-title",
                            placeholder: "What needs doing?",
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "task-description", "Description" }
                        textarea {
                            id: "task-description",
                            class: "input",
                            rows: 3,
                            placeholder: "Optional details",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-actions",
                        Button {
                            r#type: "submit",
                            variant: ButtonVariant::Primary,
                            if editing { "Save" } else { "Create" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
