use api::Task;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Task collection display with complete/edit/delete actions.
#[component]
pub fn TaskList(
    tasks: Vec<Task>,
    on_toggle: EventHandler<Task>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<i64>,
) -> Element {
    if tasks.is_empty() {
        return rsx! {
            div { class: "task-empty", "No tasks found. Create your first task!" }
        };
    }

    let items = tasks.into_iter().map(|task| {
        let id = task.id;
        let toggle = task.clone();
        let edit = task.clone();
        let item_class = if task.completed {
            "task-item completed"
        } else {
            "task-item"
        };

        rsx! {
            li {
                key: "{id}",
                class: "{item_class}",

                div {
                    class: "task-main",
                    input {
                        r#type: "checkbox",
                        class: "task-checkbox",
                        checked: task.completed,
                        onchange: move |_| on_toggle.call(toggle.clone()),
                    }
                    div {
                        class: "task-text",
                        h3 { class: "task-title", "{task.title}" }
                        if let Some(description) = &task.description {
                            p { class: "task-description", "{description}" }
                        }
                        p { class: "task-created", "Created: {task.created_date()}" }
                    }
                }

                div {
                    class: "task-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_edit.call(edit.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                }
            }
        }
    });

    rsx! {
        ul { class: "task-list", {items} }
    }
}
