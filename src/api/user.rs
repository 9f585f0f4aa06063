//! User sub-client.

use serde_json::Value;

use crate::api::DEFAULT_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for user accounts.
pub struct Users<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Users<'a> {
    /// `GET user`
    pub async fn list(&self) -> Result<Value, GsaError> {
        self.client.http.get("user").await
    }

    /// `GET user/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Value, GsaError> {
        self.client.http.get(&format!("user/{}", uuid)).await
    }

    /// `GET user/{uuid}/stats/{type}`, defaulting to `hours-played`.
    pub async fn stat(&self, uuid: &str, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!("user/{}/stats/{}", uuid, stat.unwrap_or(DEFAULT_STAT));
        self.client.http.get(&path).await
    }
}
