//! `client_linux.yaml` renderer.

use std::path::Path;

use crate::RenderContext;
use crate::error::RenderError;
use crate::yaml::{quoted, scalar};

pub fn render(ctx: &RenderContext<'_>) -> String {
    format!(
        r#"# ============================================
# Hysteria 2 Linux client configuration
# Generated: {generated_at}
# ============================================

server: {server}

auth: {auth}

obfs:
  type: salamander
  salamander:
    password: {obfs}

tls:
  insecure: true
  # To pin the server certificate instead, replace the line above with:
  # insecure: false
  # pinSHA256: {fingerprint}

bandwidth:
  up: {bw_up}
  down: {bw_down}

# SOCKS5 proxy
socks5:
  listen: {socks5}

# HTTP proxy
http:
  listen: {http}

# Optional: TCP port forwarding
# tcpForwarding:
#   - listen: 127.0.0.1:8888
#     remote: example.com:443

# Optional: UDP port forwarding
# udpForwarding:
#   - listen: 127.0.0.1:5353
#     remote: 8.8.8.8:53
#     timeout: 30s
"#,
        generated_at = ctx.generated_at,
        server = scalar(&ctx.identity.authority()),
        auth = quoted(ctx.secrets.auth.expose()),
        obfs = quoted(ctx.secrets.obfs.expose()),
        fingerprint = quoted(&ctx.cert.fingerprint),
        bw_up = scalar(&ctx.client.bandwidth_up),
        bw_down = scalar(&ctx.client.bandwidth_down),
        socks5 = scalar(&ctx.client.socks5_listen),
        http = scalar(&ctx.client.http_listen),
    )
}

/// Render and write `client_linux.yaml`.
pub fn write(ctx: &RenderContext<'_>, path: &Path) -> Result<String, RenderError> {
    let config = render(ctx);
    crate::write_file(path, &config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixture::Fixture;

    #[test]
    fn server_line() {
        let f = Fixture::new();
        assert!(render(&f.ctx()).contains("\nserver: 203.0.113.10:8443\n"));
    }

    #[test]
    fn ipv6_server_is_bracketed() {
        let mut f = Fixture::new();
        f.identity.ip = "2001:db8::1".into();
        let out = render(&f.ctx());
        assert!(out.contains("\nserver: \"[2001:db8::1]:8443\"\n"));
        let doc: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(doc["server"].as_str(), Some("[2001:db8::1]:8443"));
    }

    #[test]
    fn parses_as_yaml() {
        let f = Fixture::new();
        let doc: serde_yaml::Value = serde_yaml::from_str(&render(&f.ctx())).unwrap();
        assert_eq!(doc["server"].as_str(), Some("203.0.113.10:8443"));
        assert_eq!(doc["auth"].as_str(), Some(f.secrets.auth.expose()));
        assert_eq!(
            doc["obfs"]["salamander"]["password"].as_str(),
            Some(f.secrets.obfs.expose())
        );
        assert_eq!(doc["tls"]["insecure"].as_bool(), Some(true));
        assert!(doc["tls"].get("pinSHA256").is_none());
        assert_eq!(doc["bandwidth"]["up"].as_str(), Some("50 mbps"));
        assert_eq!(doc["bandwidth"]["down"].as_str(), Some("100 mbps"));
        assert_eq!(doc["socks5"]["listen"].as_str(), Some("127.0.0.1:1080"));
        assert_eq!(doc["http"]["listen"].as_str(), Some("127.0.0.1:8080"));
        assert!(doc.get("tcpForwarding").is_none());
    }

    #[test]
    fn fingerprint_in_commented_pin() {
        let mut f = Fixture::new();
        f.cert.fingerprint = "AB:CD:EF".into();
        assert!(render(&f.ctx()).contains("  # pinSHA256: \"AB:CD:EF\"\n"));
    }

    #[test]
    fn empty_fingerprint_without_cert() {
        let f = Fixture::new();
        assert!(render(&f.ctx()).contains("  # pinSHA256: \"\"\n"));
    }

    #[test]
    fn listen_values_with_yaml_markers_survive() {
        let mut f = Fixture::new();
        f.client.socks5_listen = "127.0.0.1:1080 #lan".into();
        let doc: serde_yaml::Value = serde_yaml::from_str(&render(&f.ctx())).unwrap();
        assert_eq!(doc["socks5"]["listen"].as_str(), Some("127.0.0.1:1080 #lan"));
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let f = Fixture::new();
        assert_eq!(render(&f.ctx()), render(&f.ctx()));
    }
}
