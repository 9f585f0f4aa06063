//! Cluster sub-client.

use serde_json::Value;

use crate::api::DEFAULT_ONLINE_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for server clusters.
pub struct Clusters<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Clusters<'a> {
    /// `GET cluster/{uuid}/stats/{type}`, defaulting to `online-count-last-7-days`.
    pub async fn stat(&self, uuid: &str, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!(
            "cluster/{}/stats/{}",
            uuid,
            stat.unwrap_or(DEFAULT_ONLINE_STAT)
        );
        self.client.http.get(&path).await
    }
}
