//! Core types and constants shared across hysteria-gen crates.
//!
//! This crate provides:
//! - Default configuration values
//! - Secret generation
//! - The per-run identity and certificate parameter bags
//! - Common project metadata

pub mod defaults;
pub mod identity;
pub mod secret;

// Re-export commonly used items at crate root
pub use defaults::*;
pub use identity::{CertificateArtifact, IdentitySource, ServerIdentity};
pub use secret::{GeneratedSecrets, SECRET_ALPHABET, Secret, generate_secret};

/// Project name.
pub const PROJECT_NAME: &str = "hysteria-gen";
/// Project version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
