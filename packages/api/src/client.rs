//! # ApiClient — shared HTTP client for the backend REST API
//!
//! All outbound calls go through [`ApiClient`], which owns the backend base
//! URL and the current bearer credential. While a credential is set, every
//! request carries `Authorization: Bearer <token>`; clearing it removes the
//! header from subsequent requests.
//!
//! The actual network I/O happens behind the [`Transport`] trait so the same
//! client logic runs against `gloo-net` (web), `reqwest` (desktop), or a
//! queueing fake in tests. There are no retries and no timeout policy beyond
//! what the transport itself applies: a call either resolves or rejects and
//! the caller reacts to whichever occurs.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Pre-encoded request body with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON, sent as `application/json`.
    Json(String),
    /// Urlencoded key/value pairs, sent as `application/x-www-form-urlencoded`.
    Form(String),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestBody::Json(body) | RequestBody::Form(body) => body,
        }
    }
}

/// A fully prepared request, ready for a [`Transport`] to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes prepared requests. Implementations live in [`crate::transport`].
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// HTTP client bound to the backend base URL.
///
/// The credential slot is interior-mutable: the session state machine flips it
/// on login/logout while consumers keep shared references to the client. This
/// is safe under the single-threaded UI runtime.
pub struct ApiClient<T: Transport> {
    base_url: String,
    token: RefCell<Option<String>>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RefCell::new(None),
            transport,
        }
    }

    /// Attach a bearer credential to all subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    /// Stop sending the `Authorization` header.
    pub fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self.send(Method::Get, path, query, None).await?;
        decode(&response.body)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .send(Method::Post, path, &[], Some(encode_json(body)?))
            .await?;
        decode(&response.body)
    }

    /// POST where the caller does not care about the response body.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Post, path, &[], Some(encode_json(body)?))
            .await?;
        Ok(())
    }

    pub async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let encoded = fields
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let response = self
            .send(Method::Post, path, &[], Some(RequestBody::Form(encoded)))
            .await?;
        decode(&response.body)
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .send(Method::Put, path, &[], Some(encode_json(body)?))
            .await?;
        decode(&response.body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, &[], None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = Vec::new();
        if let Some(token) = self.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if let Some(ref body) = body {
            headers.push(("Content-Type".to_string(), body.content_type().to_string()));
        }

        let request = HttpRequest {
            method,
            url: self.build_url(path, query),
            headers,
            body,
        };
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            let encoded = query
                .iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}

fn encode_json<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;

    fn client(transport: &FakeTransport) -> ApiClient<FakeTransport> {
        ApiClient::new(ApiConfig::new("http://testserver/"), transport.clone())
    }

    #[tokio::test]
    async fn test_bearer_header_follows_token_state() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(200, "{}");
        let _: serde_json::Value = client.get("/users/me", &[]).await.unwrap();
        assert_eq!(transport.request(0).header("authorization"), None);

        client.set_token("tok123");
        transport.push_json(200, "{}");
        let _: serde_json::Value = client.get("/users/me", &[]).await.unwrap();
        assert_eq!(
            transport.request(1).header("authorization"),
            Some("Bearer tok123")
        );

        client.clear_token();
        transport.push_json(200, "{}");
        let _: serde_json::Value = client.get("/users/me", &[]).await.unwrap();
        assert_eq!(transport.request(2).header("authorization"), None);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(200, "[]");
        let _: serde_json::Value = client.get("/tasks", &[]).await.unwrap();
        assert_eq!(transport.request(0).url, "http://testserver/tasks");
    }

    #[tokio::test]
    async fn test_form_body_is_urlencoded() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(200, r#"{"access_token":"tok"}"#);
        let _: serde_json::Value = client
            .post_form("/auth/login", &[("username", "a b"), ("password", "p&q")])
            .await
            .unwrap();

        let request = transport.request(0);
        assert_eq!(
            request.body,
            Some(RequestBody::Form("username=a%20b&password=p%26q".to_string()))
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[tokio::test]
    async fn test_non_success_maps_to_status_error() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(404, r#"{"detail":"Task not found"}"#);
        let err = client.delete("/tasks/99").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                detail: Some("Task not found".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_maps_to_decode_error() {
        let transport = FakeTransport::new();
        let client = client(&transport);

        transport.push_json(200, "not json");
        let err = client.get::<serde_json::Value>("/users/me", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
