//! Profile section definitions for output, server, client, discovery, cert, and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Where artifacts go and which optional ones are produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Render the share link as `qrcode.png`.
    #[serde(default = "default_true")]
    pub qr: bool,
    /// Generate a self-signed certificate (placeholder paths otherwise).
    #[serde(default = "default_true")]
    pub cert: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            qr: true,
            cert: true,
        }
    }
}

/// Server-side values interpolated into `server.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Public address. Probed when unset.
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_server_bandwidth_up")]
    pub bandwidth_up: String,
    #[serde(default = "default_server_bandwidth_down")]
    pub bandwidth_down: String,
    /// Upstream site proxied to non-Hysteria visitors.
    #[serde(default = "default_masquerade_url")]
    pub masquerade_url: String,
    #[serde(default = "default_stats_listen")]
    pub stats_listen: String,
}

impl Default for ServerProfile {
    fn default() -> Self {
        Self {
            ip: None,
            port: default_server_port(),
            bandwidth_up: default_server_bandwidth_up(),
            bandwidth_down: default_server_bandwidth_down(),
            masquerade_url: default_masquerade_url(),
            stats_listen: default_stats_listen(),
        }
    }
}

/// Client-side values shared by the Linux, Android and share-link outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default = "default_client_bandwidth_up")]
    pub bandwidth_up: String,
    #[serde(default = "default_client_bandwidth_down")]
    pub bandwidth_down: String,
    #[serde(default = "default_socks5_listen")]
    pub socks5_listen: String,
    #[serde(default = "default_http_listen")]
    pub http_listen: String,
    /// Fragment shown by clients importing the share link.
    #[serde(default = "default_share_name")]
    pub share_name: String,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            bandwidth_up: default_client_bandwidth_up(),
            bandwidth_down: default_client_bandwidth_down(),
            socks5_listen: default_socks5_listen(),
            http_listen: default_http_listen(),
            share_name: default_share_name(),
        }
    }
}

/// Public address discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Plain-text "what is my IP" endpoint.
    #[serde(default = "default_echo_url")]
    pub echo_url: String,
    #[serde(default = "default_discovery_timeout")]
    pub timeout_secs: u64,
    /// Address the UDP route probe connects to. No datagram is sent.
    #[serde(default = "default_udp_target")]
    pub udp_target: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            echo_url: default_echo_url(),
            timeout_secs: default_discovery_timeout(),
            udp_target: default_udp_target(),
        }
    }
}

/// Certificate generator implementation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CertBackendKind {
    /// Shell out to the `openssl` binary.
    #[default]
    Openssl,
    /// Generate in-process.
    Builtin,
}

/// Self-signed certificate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertConfig {
    #[serde(default)]
    pub backend: CertBackendKind,
    /// OpenSSL binary name or path.
    #[serde(default = "default_openssl_bin")]
    pub openssl: String,
    #[serde(default = "default_cert_days")]
    pub days: u32,
    #[serde(default = "default_cert_organization")]
    pub organization: String,
    #[serde(default = "default_cert_country")]
    pub country: String,
    /// Upper bound for each certificate tool invocation.
    #[serde(default = "default_cert_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CertConfig {
    fn default() -> Self {
        Self {
            backend: CertBackendKind::default(),
            openssl: default_openssl_bin(),
            days: default_cert_days(),
            organization: default_cert_organization(),
            country: default_cert_country(),
            timeout_secs: default_cert_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Log format: json, pretty, or compact. Default: pretty.
    pub format: Option<String>,
    /// Output target: stdout or stderr. Default: stderr.
    pub output: Option<String>,
    /// Per-module log level filters (e.g., {"hysteria_net": "debug", "reqwest": "warn"}).
    #[serde(default)]
    pub filters: HashMap<String, String>,
}
