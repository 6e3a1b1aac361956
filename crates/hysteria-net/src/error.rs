//! Address discovery errors.

use std::net::AddrParseError;

/// Errors from a single discovery probe.
///
/// These never escape [`IdentityResolver::resolve`](crate::IdentityResolver::resolve);
/// they are logged and the next probe is tried.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// HTTP request failed (connect, TLS, timeout, body).
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// Echo service answered with a non-success status.
    #[error("echo service returned status {0}")]
    Status(u16),

    /// Echo service answered with an empty body.
    #[error("echo service returned an empty body")]
    EmptyBody,

    /// Response or target was not an IP address.
    #[error("invalid IP address: {0}")]
    AddrParse(#[from] AddrParseError),

    /// Socket operation failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The route probe returned an unspecified local address.
    #[error("no routable local address")]
    Unroutable,
}
