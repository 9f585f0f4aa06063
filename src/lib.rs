//! # GameServerApp SDK
//!
//! A Rust client for the GameServerApp (GSA) REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Network constants and error types
//! 2. **Transport**: `Transport` / `CredentialStore` seams plus the default
//!    reqwest transport with a shared cookie jar
//! 3. **Dispatcher**: `GsaHttp::request`, one HTTP call per invocation
//! 4. **High-Level Client**: `GsaClient` with nested sub-clients per API area
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gameserverapp_sdk::prelude::*;
//!
//! let client = GsaClient::builder("client-id", "secret")
//!     .base_url("https://api.gameserverapp.com/api")
//!     .build()?;
//!
//! let settings = client.domain().settings().await?;
//! let hours = client.domain().stat(None).await?;
//! let featured = client.shop().items_with_query(Some("featured"), [("page", "2")]).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Base URL, version and header constants.
pub mod network;

// ── Layer 2 + 3: Transport and dispatcher ────────────────────────────────────

/// Transport seam, credential store and the request dispatcher.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// Endpoint sub-clients, one per API area.
pub mod api;

/// `GsaClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ConfigError, GsaError};

    // Network
    pub use crate::network::{API_VERSION, AUTH_COOKIE_NAME, DEFAULT_API_URL};

    // Transport seams
    pub use crate::http::{
        CredentialStore, GsaHttp, HttpRequest, HttpResponse, Method, NoCredentials, Transport,
        TransportError,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{
        CharactersClient, ClientConfig, ClustersClient, DomainClient, GroupsClient, GsaClient,
        GsaClientBuilder, ServersClient, ShopClient, UsersClient,
    };
}
