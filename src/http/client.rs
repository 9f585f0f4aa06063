//! Request dispatcher: `GsaHttp`.
//!
//! Builds `<base>/<version>/<path>`, attaches the identification and bearer
//! headers, executes through the injected [`Transport`] and folds every
//! failure into [`GsaError`].

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::GsaError;
use crate::http::transport::{CredentialStore, HttpRequest, Method, Transport};
use crate::network::{API_VERSION, CLIENT_ID_HEADER, USER_AGENT};

/// Low-level dispatcher shared by all sub-clients.
#[derive(Clone)]
pub struct GsaHttp {
    base_url: String,
    client_id: String,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
}

impl GsaHttp {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a versioned resource path. Slashes are not normalized.
    pub fn url(&self, version: &str, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, version, path)
    }

    /// Issue one request and return the parsed payload.
    ///
    /// `body` is only sent for `POST`. A 2xx body that is not JSON comes back
    /// as `Value::String`.
    pub async fn request(
        &self,
        method: Method,
        version: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GsaError> {
        let url = self.url(version, path);

        let mut headers = vec![
            ("User-Agent", USER_AGENT.to_string()),
            (CLIENT_ID_HEADER, self.client_id.clone()),
        ];
        let token = self.credentials.token_for(&url);
        if let Some(token) = &token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        let body = match method {
            Method::Post => body,
            Method::Get | Method::Delete => None,
        };

        tracing::debug!(
            method = %method,
            url = %url,
            authorized = token.is_some(),
            "Sending GSA request"
        );

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        let resp = self
            .transport
            .execute(request)
            .await
            .map_err(|e| GsaError::Transport { message: e.message })?;

        tracing::trace!(status = resp.status, "Received GSA response");

        if !resp.is_success() {
            return Err(GsaError::Http {
                status: resp.status,
                body: resp.body,
            });
        }

        Ok(parse_payload(resp.body))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, GsaError> {
        self.request(Method::Get, API_VERSION, path, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<Value, GsaError> {
        self.request(Method::Post, API_VERSION, path, Some(body))
            .await
    }
}

impl fmt::Debug for GsaHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GsaHttp")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

fn parse_payload(body: String) -> Value {
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}
