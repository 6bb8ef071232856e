//! HTTP transport seam between the auth client and the network.
//!
//! The auth client only sees `ApiRequest`/`ApiResponse`. Native builds send
//! them with `reqwest` and a cookie store; browser builds use `gloo-net` with
//! `credentials: include` so the session cookie travels with every call.
//! Transports never interpret bodies; that happens in `core::response`.

use async_trait::async_trait;
use derive_more::Display;

use crate::core::error::TransportError;

/// HTTP methods used by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
}

/// A request relative to the configured API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body,
        }
    }
}

/// Raw response: status plus the unparsed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the remote API with credentials included.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(feature = "ssr")]
pub use native::ReqwestTransport;

#[cfg(feature = "ssr")]
mod native {
    use super::{ApiRequest, ApiResponse, HttpTransport, Method, async_trait};
    use crate::core::config::{ApiConfig, build_url};
    use crate::core::error::TransportError;

    /// `reqwest` transport with a cookie store, so a login cookie is replayed
    /// by later calls from the same transport.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
        base_url: String,
    }

    impl ReqwestTransport {
        pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
            let mut builder = reqwest::Client::builder().cookie_store(true);
            if let Some(timeout) = config.request_timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|err| TransportError::Request(err.to_string()))?;

            Ok(Self {
                client,
                base_url: config.api_base_url.clone(),
            })
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            let url = build_url(&self.base_url, &request.path);
            let mut builder = match request.method {
                Method::Get => self.client.get(&url),
                Method::Post => self.client.post(&url),
            }
            .header(reqwest::header::ACCEPT, "application/json");

            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(map_request_error)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(map_request_error)?;

            Ok(ApiResponse { status, body })
        }
    }

    fn map_request_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::Request(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserTransport;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    use super::{ApiRequest, ApiResponse, HttpTransport, Method, async_trait};
    use crate::core::config::{ApiConfig, build_url};
    use crate::core::error::TransportError;

    /// `fetch`-based transport for the browser.
    #[derive(Debug, Clone)]
    pub struct BrowserTransport {
        base_url: String,
    }

    impl BrowserTransport {
        pub fn new(config: &ApiConfig) -> Self {
            Self {
                base_url: config.api_base_url.clone(),
            }
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl HttpTransport for BrowserTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            let url = build_url(&self.base_url, &request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            }
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");

            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|err| TransportError::Request(err.to_string()))?;

            let response = prepared.send().await.map_err(map_request_error)?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            Ok(ApiResponse { status, body })
        }
    }

    fn map_request_error(err: gloo_net::Error) -> TransportError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            TransportError::Timeout
        } else {
            TransportError::Network(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(400, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_request_constructors() {
        let request = ApiRequest::get("/api/user/check-auth");
        assert_eq!(request.method, Method::Get);
        assert!(request.body.is_none());

        let request = ApiRequest::post("/api/user/logout", None);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/user/logout");
    }
}
