/// Backend base URL when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives.
///
/// WASM builds have no runtime environment, so the override is resolved at
/// compile time from `TASKDECK_API_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("TASKDECK_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
