//! Domain sub-client: settings and domain-wide stats.

use serde_json::Value;

use crate::api::DEFAULT_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for the domain the credentials belong to.
pub struct Domain<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Domain<'a> {
    /// `GET domain/settings`
    pub async fn settings(&self) -> Result<Value, GsaError> {
        self.client.http.get("domain/settings").await
    }

    /// `GET domain/stats/{type}`, defaulting to `hours-played`.
    pub async fn stat(&self, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!("domain/stats/{}", stat.unwrap_or(DEFAULT_STAT));
        self.client.http.get(&path).await
    }
}
