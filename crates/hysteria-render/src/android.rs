//! `client_android.json` renderer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RenderContext;
use crate::error::RenderError;

/// Client settings in the JSON layout the Android app imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidClientConfig {
    pub server: String,
    pub auth: String,
    pub obfs: Obfs,
    pub tls: Tls,
    pub bandwidth: Bandwidth,
    pub socks5: Listener,
    pub http: Listener,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obfs {
    #[serde(rename = "type")]
    pub kind: String,
    pub salamander: Salamander,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salamander {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tls {
    pub insecure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bandwidth {
    pub up: String,
    pub down: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    pub listen: String,
}

pub fn render(ctx: &RenderContext<'_>) -> AndroidClientConfig {
    AndroidClientConfig {
        server: ctx.identity.authority(),
        auth: ctx.secrets.auth.expose().to_string(),
        obfs: Obfs {
            kind: "salamander".to_string(),
            salamander: Salamander {
                password: ctx.secrets.obfs.expose().to_string(),
            },
        },
        tls: Tls { insecure: true },
        bandwidth: Bandwidth {
            up: ctx.client.bandwidth_up.clone(),
            down: ctx.client.bandwidth_down.clone(),
        },
        socks5: Listener {
            listen: ctx.client.socks5_listen.clone(),
        },
        http: Listener {
            listen: ctx.client.http_listen.clone(),
        },
    }
}

/// Pretty-printed JSON with two-space indentation.
pub fn to_json(config: &AndroidClientConfig) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Render and write `client_android.json`.
pub fn write(ctx: &RenderContext<'_>, path: &Path) -> Result<AndroidClientConfig, RenderError> {
    let config = render(ctx);
    crate::write_file(path, &to_json(&config)?)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixture::Fixture;

    #[test]
    fn json_fields_match_context() {
        let f = Fixture::new();
        let json = to_json(&render(&f.ctx())).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["server"], "203.0.113.10:8443");
        assert_eq!(v["auth"], f.secrets.auth.expose());
        assert_eq!(v["obfs"]["type"], "salamander");
        assert_eq!(v["obfs"]["salamander"]["password"], f.secrets.obfs.expose());
        assert_eq!(v["tls"]["insecure"], true);
        assert_eq!(v["bandwidth"]["up"], "50 mbps");
        assert_eq!(v["bandwidth"]["down"], "100 mbps");
        assert_eq!(v["socks5"]["listen"], "127.0.0.1:1080");
        assert_eq!(v["http"]["listen"], "127.0.0.1:8080");
    }

    #[test]
    fn key_order_is_stable() {
        let f = Fixture::new();
        let json = to_json(&render(&f.ctx())).unwrap();
        let keys = ["\"server\"", "\"auth\"", "\"obfs\"", "\"tls\"", "\"bandwidth\"", "\"socks5\"", "\"http\""];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.starts_with("{\n  \"server\""));
    }

    #[test]
    fn write_returns_parsed_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client_android.json");
        let f = Fixture::new();
        let returned = write(&f.ctx(), &path).unwrap();
        let on_disk: AndroidClientConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(returned, on_disk);
    }
}
