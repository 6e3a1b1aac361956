//! Generator profile loading, CLI overrides and validation.
//!
//! A profile is optional: every section falls back to the defaults in
//! `hysteria_core::defaults`, so `Config::default()` reproduces the stock
//! Hysteria 2 layout.

mod cli;
mod defaults;
mod loader;
mod types;
mod validate;

use serde::{Deserialize, Serialize};

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::*;
pub use validate::validate_config;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub server: ServerProfile,
    #[serde(default)]
    pub client: ClientProfile,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub cert: CertConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
