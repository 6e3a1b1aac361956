//! SHA-256 certificate fingerprints in OpenSSL's `AB:CD:...` form.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::CertError;

/// Colon-separated uppercase hex, as printed by `openssl x509 -fingerprint`.
pub fn format_fingerprint(digest: &[u8]) -> String {
    let hex = hex::encode_upper(digest);
    let mut out = String::with_capacity(hex.len() + hex.len() / 2);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(c);
    }
    out
}

/// Fingerprint of DER-encoded certificate bytes.
pub fn sha256_fingerprint(der: &[u8]) -> String {
    format_fingerprint(&Sha256::digest(der))
}

/// Fingerprint of the first certificate in a PEM file.
pub fn sha256_fingerprint_pem(path: &Path) -> Result<String, CertError> {
    let mut reader = BufReader::new(File::open(path)?);
    let cert = rustls_pemfile::certs(&mut reader)
        .next()
        .ok_or_else(|| CertError::Fingerprint(format!("no certificate in {}", path.display())))??;
    Ok(sha256_fingerprint(cert.as_ref()))
}

/// Extract the digest from `sha256 Fingerprint=AB:CD:...`.
///
/// OpenSSL 1.1 prints `SHA256 Fingerprint=`, 3.x prints `sha256 Fingerprint=`.
pub fn parse_openssl_fingerprint(stdout: &str) -> Option<String> {
    let line = stdout
        .lines()
        .find(|l| l.to_ascii_lowercase().starts_with("sha256 fingerprint="))?;
    let (_, value) = line.split_once('=')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
