//! reqwest-backed transport with a shared cookie jar.
//!
//! Only available with the `http` feature.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Client;

use crate::error::ConfigError;
use crate::http::transport::{
    CredentialStore, HttpRequest, HttpResponse, Method, Transport, TransportError,
};

/// Default transport. Persists `Set-Cookie` responses into `jar`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport. With `tls_verify == false` self-signed and
    /// mismatched certificates are accepted.
    pub fn new(tls_verify: bool, jar: Arc<Jar>) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!tls_verify)
            .cookie_provider(jar)
            .build()
            .map_err(|e| ConfigError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = self.client.request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::new(err.to_string())
    }
}

/// The jar's cookie string for `url` (`name=value; name2=value2`).
impl CredentialStore for Jar {
    fn token_for(&self, url: &str) -> Option<String> {
        let url = reqwest::Url::parse(url).ok()?;
        let header = self.cookies(&url)?;
        header.to_str().ok().map(str::to_owned)
    }
}
