//! Profile validation logic.

use crate::Config;
use crate::loader::ConfigError;

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.output.dir.trim().is_empty() {
        return Err(ConfigError::Validation("output.dir is empty".into()));
    }
    if config.server.port == 0 {
        return Err(ConfigError::Validation("server.port must be 1..=65535".into()));
    }
    if let Some(ip) = &config.server.ip {
        if ip.trim().is_empty() {
            return Err(ConfigError::Validation("server.ip is empty".into()));
        }
        // Used as the certificate CN in `-subj /CN=..`.
        if ip.contains('/') {
            return Err(ConfigError::Validation(
                "server.ip must not contain '/'".into(),
            ));
        }
    }
    for (name, value) in [
        ("server.bandwidth_up", &config.server.bandwidth_up),
        ("server.bandwidth_down", &config.server.bandwidth_down),
        ("server.masquerade_url", &config.server.masquerade_url),
        ("server.stats_listen", &config.server.stats_listen),
        ("client.bandwidth_up", &config.client.bandwidth_up),
        ("client.bandwidth_down", &config.client.bandwidth_down),
        ("client.socks5_listen", &config.client.socks5_listen),
        ("client.http_listen", &config.client.http_listen),
        ("cert.openssl", &config.cert.openssl),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{name} is empty")));
        }
    }
    let echo = &config.discovery.echo_url;
    if !(echo.starts_with("http://") || echo.starts_with("https://")) {
        return Err(ConfigError::Validation(
            "discovery.echo_url must be an http(s) URL".into(),
        ));
    }
    if config.discovery.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "discovery.timeout_secs must be > 0".into(),
        ));
    }
    if config.cert.days == 0 {
        return Err(ConfigError::Validation("cert.days must be > 0".into()));
    }
    if config.cert.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "cert.timeout_secs must be > 0".into(),
        ));
    }
    // Subject fields are spliced into `-subj /CN=../O=../C=..`.
    if config.cert.organization.contains('/') || config.cert.country.contains('/') {
        return Err(ConfigError::Validation(
            "cert.organization and cert.country must not contain '/'".into(),
        ));
    }
    if let Some(format) = &config.logging.format {
        let valid_formats = ["json", "pretty", "compact"];
        if !valid_formats.contains(&format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of: {:?}",
                valid_formats
            )));
        }
    }
    Ok(())
}
