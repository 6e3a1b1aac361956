//! CLI override definitions and application logic.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::types::CertBackendKind;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Server IP address (auto-detected when omitted)
    #[arg(short, long)]
    pub ip: Option<String>,
    /// Server listen port [default: 443]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,
    /// Output directory [default: ./hysteria_configs]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not generate the QR code image
    #[arg(long)]
    pub no_qr: bool,
    /// Do not generate a self-signed certificate (placeholder paths only)
    #[arg(long)]
    pub no_cert: bool,
    /// Certificate generator
    #[arg(long, value_enum)]
    pub cert_backend: Option<CertBackendKind>,
    /// Timeout for each certificate tool invocation (seconds)
    #[arg(long)]
    pub cert_timeout_secs: Option<u64>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.ip
        && !v.trim().is_empty()
    {
        config.server.ip = Some(v.trim().to_string());
    }
    if let Some(v) = overrides.port {
        config.server.port = v;
    }
    if let Some(v) = &overrides.output {
        config.output.dir = v.to_string_lossy().into_owned();
    }
    // Flags only ever switch optional outputs off.
    if overrides.no_qr {
        config.output.qr = false;
    }
    if overrides.no_cert {
        config.output.cert = false;
    }
    if let Some(v) = overrides.cert_backend {
        config.cert.backend = v;
    }
    if let Some(v) = overrides.cert_timeout_secs {
        config.cert.timeout_secs = v;
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOverrides {
        CliOverrides::parse_from(std::iter::once("hysteria-gen").chain(args.iter().copied()))
    }

    #[test]
    fn port_zero_and_out_of_range_rejected() {
        let parse = |args: &[&str]| {
            CliOverrides::try_parse_from(std::iter::once("hysteria-gen").chain(args.iter().copied()))
        };
        assert!(parse(&["--port", "0"]).is_err());
        assert!(parse(&["--port", "70000"]).is_err());
        assert!(parse(&["--port", "abc"]).is_err());
        assert_eq!(parse(&["--port", "65535"]).unwrap().port, Some(65535));
    }

    #[test]
    fn short_flags() {
        let o = parse(&["-i", "203.0.113.10", "-p", "8443", "-o", "/tmp/out"]);
        assert_eq!(o.ip.as_deref(), Some("203.0.113.10"));
        assert_eq!(o.port, Some(8443));
        assert_eq!(o.output, Some(PathBuf::from("/tmp/out")));
        assert!(!o.no_qr);
        assert!(!o.no_cert);
    }

    #[test]
    fn long_flags() {
        let o = parse(&[
            "--ip",
            "1.2.3.4",
            "--port",
            "443",
            "--no-qr",
            "--no-cert",
            "--cert-backend",
            "builtin",
        ]);
        assert!(o.no_qr);
        assert!(o.no_cert);
        assert_eq!(o.cert_backend, Some(CertBackendKind::Builtin));
    }

    #[test]
    fn out_of_range_port_rejected() {
        let res = CliOverrides::try_parse_from(["hysteria-gen", "--port", "70000"]);
        assert!(res.is_err());
    }

    #[test]
    fn apply_sets_values() {
        let mut cfg = Config::default();
        let o = parse(&["--ip", "203.0.113.10", "--port", "8443", "--no-qr", "--log-level", "debug"]);
        apply_overrides(&mut cfg, &o);
        assert_eq!(cfg.server.ip.as_deref(), Some("203.0.113.10"));
        assert_eq!(cfg.server.port, 8443);
        assert!(!cfg.output.qr);
        assert!(cfg.output.cert);
        assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_ip_keeps_detection() {
        let mut cfg = Config::default();
        apply_overrides(&mut cfg, &parse(&["--ip", ""]));
        assert!(cfg.server.ip.is_none());
    }

    #[test]
    fn absent_flags_keep_profile() {
        let mut cfg = Config::default();
        cfg.output.qr = false;
        cfg.server.port = 9443;
        apply_overrides(&mut cfg, &CliOverrides::default());
        assert!(!cfg.output.qr);
        assert_eq!(cfg.server.port, 9443);
    }
}
