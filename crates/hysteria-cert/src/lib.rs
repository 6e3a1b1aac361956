//! Self-signed certificate provisioning for hysteria-gen.
//!
//! Two backends produce the same artifact, a P-256 key and a self-signed
//! certificate whose common name is the server address:
//!
//! - [`OpensslBackend`] shells out to `openssl` (the default).
//! - [`BuiltinBackend`] generates in-process with `rcgen`.
//!
//! [`provision`] never fails. When a backend errors, the artifact keeps the
//! intended paths with an empty fingerprint and the error is handed back for
//! the run summary.

pub mod builtin;
pub mod error;
pub mod fingerprint;
pub mod openssl;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use hysteria_config::{CertBackendKind, CertConfig};
use hysteria_core::{CERT_FILE, CertificateArtifact, KEY_FILE};
use tracing::{info, warn};

pub use builtin::BuiltinBackend;
pub use error::CertError;
pub use openssl::OpensslBackend;

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct CertRequest {
    /// Subject common name, normally the server IP.
    pub common_name: String,
    pub output_dir: PathBuf,
    pub days: u32,
    pub organization: String,
    pub country: String,
}

impl CertRequest {
    pub fn new(common_name: impl Into<String>, output_dir: impl Into<PathBuf>, cfg: &CertConfig) -> Self {
        Self {
            common_name: common_name.into(),
            output_dir: output_dir.into(),
            days: cfg.days,
            organization: cfg.organization.clone(),
            country: cfg.country.clone(),
        }
    }

    pub fn cert_path(&self) -> PathBuf {
        self.output_dir.join(CERT_FILE)
    }

    pub fn key_path(&self) -> PathBuf {
        self.output_dir.join(KEY_FILE)
    }

    /// OpenSSL `-subj` string.
    pub fn subject(&self) -> String {
        format!(
            "/CN={}/O={}/C={}",
            self.common_name, self.organization, self.country
        )
    }
}

/// A certificate generator.
#[async_trait]
pub trait CertBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Write the key and certificate to the request's paths.
    async fn generate(&self, request: &CertRequest) -> Result<(), CertError>;

    /// SHA-256 fingerprint of the generated certificate.
    async fn fingerprint(&self, request: &CertRequest) -> Result<String, CertError>;
}

/// Build the backend selected in the profile.
pub fn backend_from_config(cfg: &CertConfig) -> Box<dyn CertBackend> {
    match cfg.backend {
        CertBackendKind::Openssl => Box::new(OpensslBackend::new(
            cfg.openssl.clone(),
            Duration::from_secs(cfg.timeout_secs),
        )),
        CertBackendKind::Builtin => Box::new(BuiltinBackend),
    }
}

/// Result of [`provision`].
#[derive(Debug)]
pub struct Provisioned {
    pub artifact: CertificateArtifact,
    /// Set when generation, permission fixing, or fingerprinting failed.
    pub failure: Option<CertError>,
}

impl Provisioned {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Generate a certificate, degrading to placeholder values on failure.
pub async fn provision(backend: &dyn CertBackend, request: &CertRequest) -> Provisioned {
    let mut artifact = CertificateArtifact {
        cert_path: request.cert_path().to_string_lossy().into_owned(),
        key_path: request.key_path().to_string_lossy().into_owned(),
        fingerprint: String::new(),
    };

    if let Err(e) = backend.generate(request).await {
        warn!(backend = backend.name(), error = %e, "certificate generation failed, using placeholder paths");
        return Provisioned {
            artifact,
            failure: Some(e),
        };
    }
    info!(backend = backend.name(), cn = %request.common_name, "certificate generated");

    if let Err(e) = restrict_permissions(&request.key_path(), &request.cert_path()) {
        warn!(error = %e, "failed to set certificate file permissions");
        return Provisioned {
            artifact,
            failure: Some(CertError::Io(e)),
        };
    }

    match backend.fingerprint(request).await {
        Ok(fp) => {
            artifact.fingerprint = fp;
            Provisioned {
                artifact,
                failure: None,
            }
        }
        Err(e) => {
            warn!(backend = backend.name(), error = %e, "could not read certificate fingerprint");
            Provisioned {
                artifact,
                failure: Some(e),
            }
        }
    }
}

/// Key `0600`, certificate `0644`.
#[cfg(unix)]
fn restrict_permissions(key: &Path, cert: &Path) -> std::io::Result<()> {
    use std::fs::{Permissions, set_permissions};
    use std::os::unix::fs::PermissionsExt;

    set_permissions(key, Permissions::from_mode(0o600))?;
    set_permissions(cert, Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn restrict_permissions(_key: &Path, _cert: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingFingerprint;

    #[async_trait]
    impl CertBackend for FailingFingerprint {
        fn name(&self) -> &'static str {
            "failing-fingerprint"
        }

        async fn generate(&self, request: &CertRequest) -> Result<(), CertError> {
            std::fs::write(request.cert_path(), "cert")?;
            std::fs::write(request.key_path(), "key")?;
            Ok(())
        }

        async fn fingerprint(&self, _request: &CertRequest) -> Result<String, CertError> {
            Err(CertError::Fingerprint("no digest".into()))
        }
    }

    fn request(dir: &Path) -> CertRequest {
        CertRequest::new("203.0.113.10", dir, &CertConfig::default())
    }

    #[test]
    fn request_paths_and_subject() {
        let req = CertRequest::new("198.51.100.4", "/etc/hysteria", &CertConfig::default());
        assert_eq!(req.cert_path(), PathBuf::from("/etc/hysteria/server.crt"));
        assert_eq!(req.key_path(), PathBuf::from("/etc/hysteria/server.key"));
        assert_eq!(req.subject(), "/CN=198.51.100.4/O=Legitimate Company/C=US");
        assert_eq!(req.days, 3650);
    }

    #[tokio::test]
    async fn missing_tool_keeps_intended_paths() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());
        let backend = OpensslBackend::new("hysteria-gen-no-such-openssl", Duration::from_secs(5));

        let provisioned = provision(&backend, &req).await;
        assert!(!provisioned.is_complete());
        assert!(matches!(provisioned.failure, Some(CertError::ToolMissing { .. })));
        assert_eq!(
            provisioned.artifact.cert_path,
            dir.path().join("server.crt").to_string_lossy()
        );
        assert_eq!(
            provisioned.artifact.key_path,
            dir.path().join("server.key").to_string_lossy()
        );
        assert!(provisioned.artifact.fingerprint.is_empty());
    }

    #[tokio::test]
    async fn builtin_provision_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());

        let provisioned = provision(&BuiltinBackend, &req).await;
        assert!(provisioned.is_complete());
        assert!(provisioned.artifact.has_fingerprint());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn provision_sets_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());
        provision(&BuiltinBackend, &req).await;

        let key_mode = std::fs::metadata(req.key_path()).unwrap().permissions().mode();
        let cert_mode = std::fs::metadata(req.cert_path()).unwrap().permissions().mode();
        assert_eq!(key_mode & 0o777, 0o600);
        assert_eq!(cert_mode & 0o777, 0o644);
    }

    #[tokio::test]
    async fn fingerprint_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());

        let provisioned = provision(&FailingFingerprint, &req).await;
        assert!(matches!(provisioned.failure, Some(CertError::Fingerprint(_))));
        assert!(provisioned.artifact.fingerprint.is_empty());
        assert!(req.cert_path().exists());
    }

    #[test]
    fn backend_selection() {
        let mut cfg = CertConfig::default();
        assert_eq!(backend_from_config(&cfg).name(), "openssl");
        cfg.backend = CertBackendKind::Builtin;
        assert_eq!(backend_from_config(&cfg).name(), "builtin");
    }
}
