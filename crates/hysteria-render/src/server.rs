//! `server.yaml` renderer.
//!
//! Everything outside the interpolated values is fixed and mirrors the
//! Hysteria 2 server schema key for key.

use std::path::Path;

use crate::RenderContext;
use crate::error::RenderError;
use crate::yaml::{quoted, scalar};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let port = ctx.identity.port;
    format!(
        r#"# ============================================
# Hysteria 2 server configuration
# Generated: {generated_at}
# Self-signed TLS, no domain required
# ============================================

# ==================== Listener ====================
listen: :{port}

# ==================== Salamander obfuscation ====================
obfs:
  type: salamander
  salamander:
    password: {obfs}

# ==================== TLS (self-signed) ====================
tls:
  cert: {cert}
  key: {key}
  sniGuard: strict
  clientCA: ""

# ==================== QUIC tuning ====================
quic:
  initStreamReceiveWindow: 8388608
  maxStreamReceiveWindow: 8388608
  initConnReceiveWindow: 8388608
  maxConnReceiveWindow: 8388608
  maxIdleTimeout: 30s
  maxIncomingStreams: 1024
  disablePathMTUDiscovery: false

# ==================== Bandwidth ====================
bandwidth:
  up: {bw_up}
  down: {bw_down}

# ==================== Authentication ====================
auth:
  type: password
  password: {auth}

# ==================== DNS resolver ====================
resolver:
  type: udp
  udp:
    addr: 1.1.1.1:53
    timeout: 2s

# ==================== Protocol sniffing ====================
sniff:
  enable: true
  timeout: 1s
  rewriteDomain: false
  tcpPorts: "80,443,8080,8443"
  udpPorts: "443"

# ==================== ACL ====================
acl:
  inline:
    # Private networks
    - reject(10.0.0.0/8)
    - reject(172.16.0.0/12)
    - reject(192.168.0.0/16)
    - reject(127.0.0.0/8)

    # Commonly abused ports
    - reject(0.0.0.0/0:22)
    - reject(0.0.0.0/0:23)
    - reject(0.0.0.0/0:3389)
    - reject(0.0.0.0/0:445)
    - reject(0.0.0.0/0:135)
    - reject(0.0.0.0/0:139)

    # Web ports
    - direct(0.0.0.0/0:80)
    - direct(0.0.0.0/0:443)
    - direct(0.0.0.0/0:8080)
    - direct(0.0.0.0/0:8443)

    # Everything else
    - default(direct)

# ==================== Outbounds ====================
outbounds:
  - name: direct
    type: direct
    direct:
      mode: auto
      fastOpen: true

# ==================== UDP ====================
disableUDP: false
udpIdleTimeout: 30s

# ==================== Masquerade ====================
masquerade:
  type: proxy
  proxy:
    url: {masquerade}
    rewriteHost: true
    insecure: false
  listenHTTP: :80
  listenHTTPS: :{port}
  forceHTTPS: true

# ==================== Traffic stats ====================
trafficStats:
  listen: {stats_listen}
  secret: {stats}

# ==================== Speed test ====================
speedTest: false
"#,
        generated_at = ctx.generated_at,
        port = port,
        obfs = quoted(ctx.secrets.obfs.expose()),
        cert = scalar(&ctx.cert.cert_path),
        key = scalar(&ctx.cert.key_path),
        bw_up = scalar(&ctx.server.bandwidth_up),
        bw_down = scalar(&ctx.server.bandwidth_down),
        auth = quoted(ctx.secrets.auth.expose()),
        masquerade = scalar(&ctx.server.masquerade_url),
        stats_listen = scalar(&ctx.server.stats_listen),
        stats = quoted(ctx.secrets.stats.expose()),
    )
}

/// Render and write `server.yaml`.
pub fn write(ctx: &RenderContext<'_>, path: &Path) -> Result<String, RenderError> {
    let config = render(ctx);
    crate::write_file(path, &config)?;
    Ok(config)
}
