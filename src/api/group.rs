//! Group sub-client: lookup, stats, log and settings updates.

use serde_json::{json, Value};

use crate::api::DEFAULT_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for player groups (tribes, clans, ...).
pub struct Groups<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Groups<'a> {
    /// `GET group`
    pub async fn list(&self) -> Result<Value, GsaError> {
        self.client.http.get("group").await
    }

    /// `GET group/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Value, GsaError> {
        self.client.http.get(&format!("group/{}", uuid)).await
    }

    /// `GET group/{type}`, defaulting to `hours-played`.
    ///
    /// `uuid` is not part of the path.
    pub async fn stat(&self, _uuid: &str, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!("group/{}", stat.unwrap_or(DEFAULT_STAT));
        self.client.http.get(&path).await
    }

    /// `GET group/{uuid}/log`
    pub async fn log(&self, uuid: &str) -> Result<Value, GsaError> {
        self.client.http.get(&format!("group/{}/log", uuid)).await
    }

    /// `POST group/{uuid}` with `{"motd": .., "about": ..}`.
    pub async fn update_settings(
        &self,
        uuid: &str,
        motd: &str,
        about: &str,
    ) -> Result<Value, GsaError> {
        let body = json!({ "motd": motd, "about": about });
        self.client
            .http
            .post(&format!("group/{}", uuid), body)
            .await
    }
}
