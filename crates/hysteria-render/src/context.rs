//! Inputs shared by every renderer of one run.

use hysteria_config::{ClientProfile, ServerProfile};
use hysteria_core::{CertificateArtifact, GeneratedSecrets, ServerIdentity};

/// Everything a renderer may interpolate.
///
/// `generated_at` is passed in rather than read from the clock so output is
/// byte-identical for identical inputs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub identity: &'a ServerIdentity,
    pub secrets: &'a GeneratedSecrets,
    pub cert: &'a CertificateArtifact,
    pub server: &'a ServerProfile,
    pub client: &'a ClientProfile,
    pub generated_at: &'a str,
}
