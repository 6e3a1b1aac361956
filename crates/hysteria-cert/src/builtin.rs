//! In-process self-signed certificate generation.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

use async_trait::async_trait;
use rcgen::{CertificateParams, DnType, KeyPair, PKCS_ECDSA_P256_SHA256, SanType};

use crate::error::CertError;
use crate::fingerprint::sha256_fingerprint_pem;
use crate::{CertBackend, CertRequest};

/// Generates the certificate with `rcgen`; no external tools needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBackend;

#[async_trait]
impl CertBackend for BuiltinBackend {
    fn name(&self) -> &'static str {
        "builtin"
    }

    async fn generate(&self, request: &CertRequest) -> Result<(), CertError> {
        // 1. Generate key pair using ECDSA P-256
        let key_pair = KeyPair::generate_for(&PKCS_ECDSA_P256_SHA256)
            .map_err(|e| CertError::KeyGeneration(e.to_string()))?;

        // 2. Configure certificate parameters
        let mut params = CertificateParams::default();
        params
            .distinguished_name
            .push(DnType::CommonName, request.common_name.as_str());
        params
            .distinguished_name
            .push(DnType::OrganizationName, request.organization.as_str());
        params
            .distinguished_name
            .push(DnType::CountryName, request.country.as_str());

        let san = match request.common_name.parse::<IpAddr>() {
            Ok(ip) => SanType::IpAddress(ip),
            Err(_) => SanType::DnsName(request.common_name.clone().try_into().map_err(|_| {
                CertError::CertGeneration(format!("invalid name: {}", request.common_name))
            })?),
        };
        params.subject_alt_names.push(san);

        let now = time::OffsetDateTime::now_utc();
        params.not_before = now;
        params.not_after = now + time::Duration::days(i64::from(request.days));

        // 3. Generate self-signed certificate
        let cert = params
            .self_signed(&key_pair)
            .map_err(|e| CertError::CertGeneration(e.to_string()))?;

        // 4. Write certificate and private key
        fs::create_dir_all(&request.output_dir)?;
        write_private(&request.key_path(), key_pair.serialize_pem().as_bytes())?;
        fs::write(request.cert_path(), cert.pem())?;
        Ok(())
    }

    async fn fingerprint(&self, request: &CertRequest) -> Result<String, CertError> {
        sha256_fingerprint_pem(&request.cert_path())
    }
}

/// Create `path` readable by the owner only from the start.
#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(dir: &Path, cn: &str) -> CertRequest {
        CertRequest {
            common_name: cn.into(),
            output_dir: dir.to_path_buf(),
            days: 30,
            organization: "Legitimate Company".into(),
            country: "US".into(),
        }
    }

    #[tokio::test]
    async fn writes_pem_files() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "203.0.113.10");
        BuiltinBackend.generate(&req).await.unwrap();

        let cert = fs::read_to_string(req.cert_path()).unwrap();
        let key = fs::read_to_string(req.key_path()).unwrap();
        assert!(cert.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(key.contains("PRIVATE KEY-----"));
    }

    #[tokio::test]
    async fn fingerprint_is_sha256_colon_hex() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "203.0.113.10");
        BuiltinBackend.generate(&req).await.unwrap();

        let fp = BuiltinBackend.fingerprint(&req).await.unwrap();
        assert_eq!(fp.len(), 32 * 3 - 1);
        assert!(fp.split(':').all(|pair| pair.len() == 2
            && pair.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())));
    }

    #[tokio::test]
    async fn accepts_hostname_common_name() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "proxy.example.com");
        BuiltinBackend.generate(&req).await.unwrap();
        assert!(req.cert_path().exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn key_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "203.0.113.10");
        BuiltinBackend.generate(&req).await.unwrap();

        let mode = fs::metadata(req.key_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
