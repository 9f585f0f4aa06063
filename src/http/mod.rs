//! HTTP layer: transport seam, credential lookup and the request dispatcher.

pub mod client;
pub mod transport;

#[cfg(feature = "http")]
pub mod native;

pub use client::GsaHttp;
pub use transport::{
    CredentialStore, HttpRequest, HttpResponse, Method, NoCredentials, Transport, TransportError,
};

#[cfg(feature = "http")]
pub use native::ReqwestTransport;
