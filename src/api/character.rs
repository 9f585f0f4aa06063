//! Character sub-client: lookups, stats and the curated character lists.

use serde_json::Value;

use crate::api::DEFAULT_STAT;
use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for in-game characters.
pub struct Characters<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Characters<'a> {
    /// `GET characters`
    pub async fn list(&self) -> Result<Value, GsaError> {
        self.client.http.get("characters").await
    }

    /// `GET character/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Value, GsaError> {
        self.client.http.get(&format!("character/{}", uuid)).await
    }

    /// `GET character/{type}`, defaulting to `hours-played`. Like
    /// [`Groups::stat`](crate::api::group::Groups::stat), `uuid` is not part
    /// of the path.
    pub async fn stat(&self, _uuid: &str, stat: Option<&str>) -> Result<Value, GsaError> {
        let path = format!("character/{}", stat.unwrap_or(DEFAULT_STAT));
        self.client.http.get(&path).await
    }

    pub async fn top(&self) -> Result<Value, GsaError> {
        self.client.http.get("characters/top").await
    }

    pub async fn fresh(&self) -> Result<Value, GsaError> {
        self.client.http.get("characters/fresh").await
    }

    pub async fn online(&self) -> Result<Value, GsaError> {
        self.client.http.get("characters/online").await
    }

    pub async fn spotlight(&self) -> Result<Value, GsaError> {
        self.client.http.get("characters/spotlight").await
    }
}
