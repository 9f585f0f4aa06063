//! Network constants for the GameServerApp API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.gameserverapp.com/api";

/// Version segment every endpoint lives under.
pub const API_VERSION: &str = "v1";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "GSA Rust API wrapper";

/// Header identifying the calling application by its client id.
pub const CLIENT_ID_HEADER: &str = "X-AUTH-GSA-CLIENT-ID";

/// Name of the session cookie the GSA backend sets after login.
pub const AUTH_COOKIE_NAME: &str = "GSA_AUTH";
