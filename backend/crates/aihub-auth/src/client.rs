use crate::AuthResult;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP transport for the auth backend REST API
#[derive(Debug, Clone)]
pub struct AuthClient {
    pub base_url: String,
    client: ReqwestClient,
}

/// Raw status and body of a backend response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl AuthClient {
    /// Create a new client without a request timeout
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests fail after `timeout`. `None` waits indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> AuthResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request and read the whole body, whatever the status
    async fn execute(&self, req: reqwest::RequestBuilder) -> AuthResult<ApiResponse> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        log::debug!("Auth backend responded {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }

    /// POST a JSON body
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AuthResult<ApiResponse> {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    /// GET with no body
    pub async fn get(&self, path: &str) -> AuthResult<ApiResponse> {
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> AuthResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The server's `error` string, if the body is a JSON object carrying a
    /// non-empty one
    pub fn error_message(&self) -> Option<String> {
        let body: Value = serde_json::from_str(&self.body).ok()?;
        body.get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(String::from)
    }
}
