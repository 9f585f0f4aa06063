//! Server sub-client: listing and per-server stats.

use serde_json::Value;

use crate::api::DEFAULT_ONLINE_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for individual game servers.
pub struct Servers<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Servers<'a> {
    /// `GET servers`
    pub async fn list(&self) -> Result<Value, GsaError> {
        self.client.http.get("servers").await
    }

    /// `GET server/{id}/stats/{type}`, defaulting to `online-count-last-7-days`.
    pub async fn stat(&self, id: &str, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!(
            "server/{}/stats/{}",
            id,
            stat.unwrap_or(DEFAULT_ONLINE_STAT)
        );
        self.client.http.get(&path).await
    }
}
