//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

mod auth;
pub use auth::{use_auth, AppSession, Auth, AuthProvider};
pub use api::SessionState;

mod guard;
pub use guard::{guard_outcome, GuardOutcome, LoadingPlaceholder};

mod task_form;
pub use task_form::{TaskForm, TaskFormData};

mod task_list;
pub use task_list::TaskList;

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/main.css");
