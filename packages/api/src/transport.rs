//! Platform transports behind the [`Transport`] trait.
//!
//! Web builds go through the browser's `fetch` via `gloo-net`; desktop builds
//! use `reqwest`. Both translate a prepared [`HttpRequest`] one-to-one and
//! report connection-level failures as [`ApiError::Transport`].

use crate::client::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::ApiError;

#[cfg(target_arch = "wasm32")]
pub use gloo::GlooTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

/// The transport compiled for the current platform.
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = GlooTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = ReqwestTransport;

#[cfg(target_arch = "wasm32")]
mod gloo {
    use super::*;
    use gloo_net::http::Request;

    /// Browser `fetch`-backed transport.
    #[derive(Clone, Debug, Default)]
    pub struct GlooTransport;

    impl GlooTransport {
        pub fn new() -> Self {
            Self
        }
    }

    impl Transport for GlooTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let response = match request.body {
                Some(body) => builder
                    .body(body.as_str().to_string())
                    .map_err(|err| ApiError::Transport(err.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|err| ApiError::Transport(err.to_string()))?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    /// `reqwest`-backed transport for desktop builds.
    #[derive(Clone, Debug, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body.as_str().to_string());
            }

            let response = builder
                .send()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
    }
}
