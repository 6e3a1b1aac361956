//! Server identity and certificate parameter bags.

use std::fmt;
use std::net::Ipv6Addr;

use crate::defaults::{PLACEHOLDER_CERT_PATH, PLACEHOLDER_KEY_PATH};

/// Where the server address of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    /// Supplied on the command line or in the profile.
    Explicit,
    /// Discovered by the named probe.
    Detected(&'static str),
    /// Every probe failed; the sentinel placeholder is in use.
    Placeholder,
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySource::Explicit => f.write_str("explicit"),
            IdentitySource::Detected(probe) => write!(f, "detected via {probe}"),
            IdentitySource::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// Address and port the generated configs point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    pub ip: String,
    pub port: u16,
}

impl ServerIdentity {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self {
            ip: ip.into(),
            port,
        }
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn authority(&self) -> String {
        if self.ip.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.ip, self.port)
        } else {
            format!("{}:{}", self.ip, self.port)
        }
    }
}

/// Certificate and key locations plus the certificate's SHA-256 fingerprint.
///
/// `fingerprint` is empty when no certificate was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateArtifact {
    pub cert_path: String,
    pub key_path: String,
    pub fingerprint: String,
}

impl CertificateArtifact {
    /// Paths used when certificate generation is skipped.
    pub fn placeholder() -> Self {
        Self {
            cert_path: PLACEHOLDER_CERT_PATH.to_string(),
            key_path: PLACEHOLDER_KEY_PATH.to_string(),
            fingerprint: String::new(),
        }
    }

    pub fn has_fingerprint(&self) -> bool {
        !self.fingerprint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_ipv4() {
        let id = ServerIdentity::new("203.0.113.10", 8443);
        assert_eq!(id.authority(), "203.0.113.10:8443");
    }

    #[test]
    fn authority_ipv6_is_bracketed() {
        let id = ServerIdentity::new("2001:db8::1", 443);
        assert_eq!(id.authority(), "[2001:db8::1]:443");
    }

    #[test]
    fn authority_placeholder_untouched() {
        let id = ServerIdentity::new("YOUR_SERVER_IP", 443);
        assert_eq!(id.authority(), "YOUR_SERVER_IP:443");
    }

    #[test]
    fn placeholder_artifact() {
        let cert = CertificateArtifact::placeholder();
        assert_eq!(cert.cert_path, "/path/to/server.crt");
        assert_eq!(cert.key_path, "/path/to/server.key");
        assert!(!cert.has_fingerprint());
    }

    #[test]
    fn source_display() {
        assert_eq!(IdentitySource::Explicit.to_string(), "explicit");
        assert_eq!(
            IdentitySource::Detected("http-echo").to_string(),
            "detected via http-echo"
        );
    }
}
