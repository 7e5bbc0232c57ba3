//! # User models
//!
//! [`UserInfo`] is the profile the server returns from `GET /users/me`. It is
//! derived state: the client never edits it, only refetches it after a
//! credential becomes available. Timestamps stay as ISO strings so the same
//! struct works in WASM without a date-time dependency.

use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub created_at: String,
}

impl UserInfo {
    /// Display name, falling back to the username when no full name is set.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }

    /// Date portion of the ISO `created_at` timestamp.
    pub fn member_since(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user = UserInfo {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: None,
            created_at: "2024-01-01T12:30:00".to_string(),
        };
        assert_eq!(user.display_name(), "alice");

        user.full_name = Some("Alice Liddell".to_string());
        assert_eq!(user.display_name(), "Alice Liddell");
    }

    #[test]
    fn test_member_since_strips_time() {
        let user = UserInfo {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: None,
            created_at: "2024-01-01T12:30:00".to_string(),
        };
        assert_eq!(user.member_since(), "2024-01-01");
    }

    #[test]
    fn test_register_request_omits_absent_full_name() {
        let request = RegisterRequest {
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            password: "hunter22".to_string(),
            full_name: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("full_name"));
    }
}
