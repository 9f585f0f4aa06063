//! High-level client: `GsaClient` with nested sub-client accessors.
//!
//! Each API area has its own sub-client in `api/<name>.rs`.
//! This module keeps the builder, configuration and accessor methods.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::api::character::Characters;
use crate::api::cluster::Clusters;
use crate::api::domain::Domain;
use crate::api::group::Groups;
use crate::api::server::Servers;
use crate::api::shop::Shop;
use crate::api::user::Users;
use crate::error::{ConfigError, GsaError};
use crate::http::{CredentialStore, GsaHttp, Method, NoCredentials, Transport};
use crate::network::DEFAULT_API_URL;

// Re-export sub-client types for convenience.
pub use crate::api::character::Characters as CharactersClient;
pub use crate::api::cluster::Clusters as ClustersClient;
pub use crate::api::domain::Domain as DomainClient;
pub use crate::api::group::Groups as GroupsClient;
pub use crate::api::server::Servers as ServersClient;
pub use crate::api::shop::Shop as ShopClient;
pub use crate::api::user::Users as UsersClient;

/// Settings fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: String,
    /// Reserved for the login flow; no endpoint sends it.
    pub secret: String,
    pub base_url: String,
    pub tls_verify: bool,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("tls_verify", &self.tls_verify)
            .finish()
    }
}

/// The primary entry point for the GameServerApp SDK.
///
/// Provides nested sub-client accessors for each API area:
/// `client.domain()`, `client.groups()`, etc. Clones share the transport and
/// the cookie store.
#[derive(Clone, Debug)]
pub struct GsaClient {
    pub(crate) http: GsaHttp,
    config: Arc<ClientConfig>,
}

impl GsaClient {
    /// Client against the default base URL with TLS verification on.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(client_id, secret).build()
    }

    pub fn builder(client_id: impl Into<String>, secret: impl Into<String>) -> GsaClientBuilder {
        GsaClientBuilder::new(client_id, secret)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Raw dispatch for endpoints without a dedicated method.
    pub async fn request(
        &self,
        method: Method,
        version: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GsaError> {
        self.http.request(method, version, path, body).await
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn domain(&self) -> Domain<'_> {
        Domain { client: self }
    }

    pub fn clusters(&self) -> Clusters<'_> {
        Clusters { client: self }
    }

    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn characters(&self) -> Characters<'_> {
        Characters { client: self }
    }

    pub fn shop(&self) -> Shop<'_> {
        Shop { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GsaClientBuilder {
    client_id: String,
    secret: String,
    base_url: String,
    tls_verify: bool,
    transport: Option<Arc<dyn Transport>>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl GsaClientBuilder {
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            base_url: DEFAULT_API_URL.to_string(),
            tls_verify: true,
            transport: None,
            credentials: None,
        }
    }

    /// Builder seeded from `GSA_CLIENT_ID`, `GSA_CLIENT_SECRET` and the
    /// optional `GSA_API_URL` / `GSA_TLS_VERIFY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let client_id = lookup("GSA_CLIENT_ID").ok_or(ConfigError::MissingEnv("GSA_CLIENT_ID"))?;
        let secret =
            lookup("GSA_CLIENT_SECRET").ok_or(ConfigError::MissingEnv("GSA_CLIENT_SECRET"))?;

        let mut builder = Self::new(client_id, secret);
        if let Some(url) = lookup("GSA_API_URL") {
            builder = builder.base_url(&url);
        }
        if let Some(value) = lookup("GSA_TLS_VERIFY") {
            let verify = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: "GSA_TLS_VERIFY",
                        value,
                    })
                }
            };
            builder = builder.tls_verify(verify);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Disable to accept self-signed or mismatched certificates.
    pub fn tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Replace the HTTP transport.
    ///
    /// Without an explicit [`credentials`](Self::credentials) store the
    /// client then sends no `Authorization` header.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the source of the bearer credential.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<GsaClient, ConfigError> {
        if !is_header_value(&self.client_id) {
            return Err(ConfigError::InvalidClientId(self.client_id));
        }

        let (transport, credentials) = match (self.transport, self.credentials) {
            (Some(transport), credentials) => (
                transport,
                credentials.unwrap_or_else(|| Arc::new(NoCredentials) as Arc<dyn CredentialStore>),
            ),
            (None, credentials) => default_transport(self.tls_verify, credentials)?,
        };

        let config = ClientConfig {
            client_id: self.client_id,
            secret: self.secret,
            base_url: self.base_url,
            tls_verify: self.tls_verify,
        };

        Ok(GsaClient {
            http: GsaHttp::new(
                config.base_url.clone(),
                config.client_id.clone(),
                transport,
                credentials,
            ),
            config: Arc::new(config),
        })
    }
}

/// reqwest transport sharing its cookie jar with the credential lookup.
#[cfg(feature = "http")]
fn default_transport(
    tls_verify: bool,
    credentials: Option<Arc<dyn CredentialStore>>,
) -> Result<(Arc<dyn Transport>, Arc<dyn CredentialStore>), ConfigError> {
    let jar = Arc::new(reqwest::cookie::Jar::default());
    let transport = crate::http::ReqwestTransport::new(tls_verify, jar.clone())?;
    let credentials = credentials.unwrap_or_else(|| jar as Arc<dyn CredentialStore>);
    Ok((Arc::new(transport), credentials))
}

#[cfg(not(feature = "http"))]
fn default_transport(
    _tls_verify: bool,
    _credentials: Option<Arc<dyn CredentialStore>>,
) -> Result<(Arc<dyn Transport>, Arc<dyn CredentialStore>), ConfigError> {
    Err(ConfigError::MissingTransport)
}

fn is_header_value(value: &str) -> bool {
    value.bytes().all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
}
