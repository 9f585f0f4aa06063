//! Endpoint sub-clients, one per API area.
//!
//! Every method is a thin wrapper: a fixed verb plus a path template filled
//! from its arguments, dispatched through [`GsaHttp`](crate::http::GsaHttp).
//! Payloads are returned as untyped `serde_json::Value`.

pub mod character;
pub mod cluster;
pub mod domain;
pub mod group;
pub mod server;
pub mod shop;
pub mod user;

/// Stat used when a domain, group, user or character stat call passes `None`.
pub const DEFAULT_STAT: &str = "hours-played";

/// Stat used when a cluster or server stat call passes `None`.
pub const DEFAULT_ONLINE_STAT: &str = "online-count-last-7-days";
