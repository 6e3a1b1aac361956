//! Certificate provisioning errors.

use std::time::Duration;

/// Errors that can occur during certificate generation.
#[derive(Debug, thiserror::Error)]
pub enum CertError {
    #[error("{program} not found")]
    ToolMissing { program: String },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{program} timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Certificate generation failed: {0}")]
    CertGeneration(String),

    #[error("Fingerprint unavailable: {0}")]
    Fingerprint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
