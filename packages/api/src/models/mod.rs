//! Wire models for the backend REST API.

mod task;
mod user;

pub use task::{Task, TaskCreate, TaskUpdate};
pub use user::{RegisterRequest, TokenResponse, UserInfo};
