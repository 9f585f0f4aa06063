//! Shared test helpers: a transport that records requests instead of sending them.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gameserverapp_sdk::prelude::*;

pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    reply: Result<HttpResponse, TransportError>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(TransportError::new(message)),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// Credential store that returns a fixed cookie string for every URL.
pub struct StaticCookie(pub &'static str);

impl CredentialStore for StaticCookie {
    fn token_for(&self, _url: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}

pub fn client_with(transport: Arc<RecordingTransport>) -> GsaClient {
    GsaClient::builder("test-key", "test-secret")
        .transport(transport)
        .build()
        .unwrap()
}
