//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `hysteria_core::defaults`.

use hysteria_core::defaults;

/// Generate default value functions that forward to hysteria_core::defaults constants.
macro_rules! default_fns {
    // For Copy types (integers, bool, etc.)
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                defaults::$const_name.to_string()
            }
        )*
    };
}

default_fns! {
    default_server_port          => DEFAULT_SERVER_PORT: u16,
    default_discovery_timeout    => DEFAULT_DISCOVERY_TIMEOUT_SECS: u64,
    default_cert_days            => DEFAULT_CERT_DAYS: u32,
    default_cert_timeout_secs    => DEFAULT_CERT_TIMEOUT_SECS: u64,
}

default_string_fns! {
    default_output_dir           => DEFAULT_OUTPUT_DIR,
    default_server_bandwidth_up  => DEFAULT_SERVER_BANDWIDTH_UP,
    default_server_bandwidth_down => DEFAULT_SERVER_BANDWIDTH_DOWN,
    default_masquerade_url       => DEFAULT_MASQUERADE_URL,
    default_stats_listen         => DEFAULT_STATS_LISTEN,
    default_client_bandwidth_up  => DEFAULT_CLIENT_BANDWIDTH_UP,
    default_client_bandwidth_down => DEFAULT_CLIENT_BANDWIDTH_DOWN,
    default_socks5_listen        => DEFAULT_SOCKS5_LISTEN,
    default_http_listen          => DEFAULT_HTTP_LISTEN,
    default_share_name           => DEFAULT_SHARE_NAME,
    default_echo_url             => DEFAULT_ECHO_URL,
    default_udp_target           => DEFAULT_UDP_PROBE_TARGET,
    default_openssl_bin          => DEFAULT_OPENSSL_BIN,
    default_cert_organization    => DEFAULT_CERT_ORGANIZATION,
    default_cert_country         => DEFAULT_CERT_COUNTRY,
}

pub(crate) fn default_true() -> bool {
    true
}
