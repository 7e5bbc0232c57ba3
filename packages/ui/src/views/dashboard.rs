//! The signed-in dashboard: profile card, task filters, and the task list
//! with its create/edit modal.
//!
//! The task collection is fetched through [`use_resource`] so that editing
//! the search box or switching the completion filter refetches on its own.
//! Mutations never refetch; the server's response is patched into the local
//! list with the helpers from `api::tasks`.

use api::{apply_created, apply_removed, apply_updated, Task, TaskCreate, TaskUpdate};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::task_form::{TaskForm, TaskFormData};
use crate::task_list::TaskList;
use crate::use_auth;

#[component]
pub fn DashboardView(on_logged_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut tasks_loading = use_signal(|| true);
    let mut fetch_error = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut filter_completed = use_signal(|| Option::<bool>::None);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Task>::None);

    // Re-fetch the profile once on mount so the card reflects server state
    let profile_auth = auth.clone();
    let _profile_resource = use_resource(move || {
        let auth = profile_auth.clone();
        async move {
            auth.refresh_profile().await;
        }
    });

    // Refetch whenever the search term or the completion filter changes
    let fetch_auth = auth.clone();
    let _tasks_resource = use_resource(move || {
        let auth = fetch_auth.clone();
        let term = search();
        let completed = filter_completed();
        async move {
            tasks_loading.set(true);
            let query = if term.is_empty() { None } else { Some(term.as_str()) };
            match auth.session().client().list_tasks(query, completed).await {
                Ok(fetched) => {
                    fetch_error.set(None);
                    tasks.set(fetched);
                }
                Err(err) => {
                    tracing::warn!("task list fetch failed: {err}");
                    fetch_error.set(Some(err.user_message("Failed to load tasks")));
                }
            }
            tasks_loading.set(false);
        }
    });

    let submit_auth = auth.clone();
    let handle_submit = move |data: TaskFormData| {
        let auth = submit_auth.clone();
        spawn(async move {
            let result = match editing() {
                Some(task) => {
                    let update = TaskUpdate {
                        title: Some(data.title),
                        description: data.description,
                        completed: None,
                    };
                    auth.session().client().update_task(task.id, &update).await.map(
                        |updated| tasks.with_mut(|list| apply_updated(list, updated)),
                    )
                }
                None => {
                    let create = TaskCreate {
                        title: data.title,
                        description: data.description,
                    };
                    auth.session().client().create_task(&create).await.map(
                        |created| tasks.with_mut(|list| apply_created(list, created)),
                    )
                }
            };
            match result {
                Ok(()) => {
                    show_form.set(false);
                    editing.set(None);
                }
                Err(err) => tracing::warn!("task save failed: {err}"),
            }
        });
    };

    let toggle_auth = auth.clone();
    let handle_toggle = move |task: Task| {
        let auth = toggle_auth.clone();
        spawn(async move {
            let update = TaskUpdate::completion(!task.completed);
            match auth.session().client().update_task(task.id, &update).await {
                Ok(updated) => tasks.with_mut(|list| apply_updated(list, updated)),
                Err(err) => tracing::warn!("task toggle failed: {err}"),
            }
        });
    };

    let delete_auth = auth.clone();
    let handle_delete = move |id: i64| {
        let auth = delete_auth.clone();
        spawn(async move {
            match auth.session().client().delete_task(id).await {
                Ok(()) => tasks.with_mut(|list| apply_removed(list, id)),
                Err(err) => tracing::warn!("task delete failed: {err}"),
            }
        });
    };

    let logout_auth = auth.clone();
    let state = auth.state();
    let welcome = state
        .profile
        .as_ref()
        .map(|profile| profile.display_name().to_string())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h1 { class: "dashboard-title", "Taskdeck" }
                div {
                    class: "dashboard-header-actions",
                    span { class: "dashboard-welcome", "Welcome, {welcome}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            logout_auth.logout();
                            on_logged_out.call(());
                        },
                        "Log out"
                    }
                }
            }

            if let Some(profile) = &state.profile {
                section {
                    class: "profile-card",
                    h2 { class: "profile-name", "{profile.display_name()}" }
                    p { class: "profile-detail", "Username: {profile.username}" }
                    p { class: "profile-detail", "Email: {profile.email}" }
                    p { class: "profile-detail", "Member since: {profile.member_since()}" }
                }
            }

            section {
                class: "task-controls",
                Input {
                    class: "task-search",
                    placeholder: "Search tasks...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                div {
                    class: "task-filters",
                    Button {
                        variant: if filter_completed().is_none() { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        onclick: move |_| filter_completed.set(None),
                        "All"
                    }
                    Button {
                        variant: if filter_completed() == Some(false) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        onclick: move |_| filter_completed.set(Some(false)),
                        "Active"
                    }
                    Button {
                        variant: if filter_completed() == Some(true) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        onclick: move |_| filter_completed.set(Some(true)),
                        "Completed"
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New Task"
                }
            }

            if let Some(err) = fetch_error() {
                div { class: "form-error", "{err}" }
            }

            if tasks_loading() {
                div { class: "task-loading", "Loading tasks..." }
            } else {
                TaskList {
                    tasks: tasks(),
                    on_toggle: handle_toggle,
                    on_edit: move |task: Task| {
                        editing.set(Some(task));
                        show_form.set(true);
                    },
                    on_delete: handle_delete,
                }
            }

            if show_form() {
                TaskForm {
                    task: editing(),
                    on_submit: handle_submit,
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }
        }
    }
}
