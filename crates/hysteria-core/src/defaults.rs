//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

// ============================================================================
// Output Defaults
// ============================================================================

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./hysteria_configs";
/// Server config file name.
pub const SERVER_CONFIG_FILE: &str = "server.yaml";
/// Linux client config file name.
pub const LINUX_CLIENT_FILE: &str = "client_linux.yaml";
/// Android client config file name.
pub const ANDROID_CLIENT_FILE: &str = "client_android.json";
/// QR code image file name.
pub const QR_CODE_FILE: &str = "qrcode.png";
/// Certificate file name.
pub const CERT_FILE: &str = "server.crt";
/// Private key file name.
pub const KEY_FILE: &str = "server.key";

// ============================================================================
// Server Defaults
// ============================================================================

/// Default server listen port.
pub const DEFAULT_SERVER_PORT: u16 = 443;
/// Default server upload bandwidth cap.
pub const DEFAULT_SERVER_BANDWIDTH_UP: &str = "100 mbps";
/// Default server download bandwidth cap.
pub const DEFAULT_SERVER_BANDWIDTH_DOWN: &str = "100 mbps";
/// Default masquerade (decoy website) upstream.
pub const DEFAULT_MASQUERADE_URL: &str = "https://www.visa.com";
/// Default traffic stats API listen address.
pub const DEFAULT_STATS_LISTEN: &str = "127.0.0.1:9999";

// ============================================================================
// Client Defaults
// ============================================================================

/// Default client upload bandwidth cap.
pub const DEFAULT_CLIENT_BANDWIDTH_UP: &str = "50 mbps";
/// Default client download bandwidth cap.
pub const DEFAULT_CLIENT_BANDWIDTH_DOWN: &str = "100 mbps";
/// Default local SOCKS5 listen address.
pub const DEFAULT_SOCKS5_LISTEN: &str = "127.0.0.1:1080";
/// Default local HTTP proxy listen address.
pub const DEFAULT_HTTP_LISTEN: &str = "127.0.0.1:8080";
/// Default share link display name.
pub const DEFAULT_SHARE_NAME: &str = "Hysteria2-Secure";

// ============================================================================
// Secret Defaults
// ============================================================================

/// Obfuscation password length.
pub const OBFS_PASSWORD_LEN: usize = 32;
/// Auth password length.
pub const AUTH_PASSWORD_LEN: usize = 32;
/// Traffic stats secret length.
pub const STATS_SECRET_LEN: usize = 24;

// ============================================================================
// Discovery Defaults
// ============================================================================

/// Default public IP echo service.
pub const DEFAULT_ECHO_URL: &str = "https://api.ipify.org";
/// Default IP echo request timeout in seconds.
pub const DEFAULT_DISCOVERY_TIMEOUT_SECS: u64 = 5;
/// Default UDP route probe target. Nothing is sent to it.
pub const DEFAULT_UDP_PROBE_TARGET: &str = "8.8.8.8:80";
/// Sentinel used when no address could be discovered.
pub const PLACEHOLDER_IP: &str = "YOUR_SERVER_IP";

// ============================================================================
// Certificate Defaults
// ============================================================================

/// Default certificate validity in days (~10 years).
pub const DEFAULT_CERT_DAYS: u32 = 3650;
/// Default certificate subject organization.
pub const DEFAULT_CERT_ORGANIZATION: &str = "Legitimate Company";
/// Default certificate subject country.
pub const DEFAULT_CERT_COUNTRY: &str = "US";
/// Default OpenSSL binary.
pub const DEFAULT_OPENSSL_BIN: &str = "openssl";
/// Default timeout for each certificate tool invocation in seconds.
pub const DEFAULT_CERT_TIMEOUT_SECS: u64 = 60;
/// Certificate path written into configs when generation is skipped.
pub const PLACEHOLDER_CERT_PATH: &str = "/path/to/server.crt";
/// Key path written into configs when generation is skipped.
pub const PLACEHOLDER_KEY_PATH: &str = "/path/to/server.key";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default log format.
pub const DEFAULT_LOG_FORMAT: &str = "pretty";
/// Default log output.
pub const DEFAULT_LOG_OUTPUT: &str = "stderr";
