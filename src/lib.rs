//! # hysteria-gen
//!
//! Generates the configuration artifacts of a Hysteria 2 deployment: server
//! config, Linux and Android client configs, a share link with optional QR
//! code, and a self-signed certificate.
//!
//! ## Crates
//!
//! - [`hysteria_core`] - Defaults, secrets and per-run parameter bags
//! - [`hysteria_config`] - Profile loading, CLI overrides and validation
//! - [`hysteria_net`] - Public address discovery
//! - [`hysteria_cert`] - Self-signed certificate provisioning
//! - [`hysteria_render`] - Config templates, share link and QR code

pub mod cli;
pub mod generator;
pub mod report;

pub use hysteria_cert as cert;
pub use hysteria_config as config;
pub use hysteria_core as core;
pub use hysteria_net as net;
pub use hysteria_render as render;

pub use generator::{Degradation, GenerateError, GenerationReport, Generator, Step};
