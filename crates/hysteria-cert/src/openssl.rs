//! Certificate generation by shelling out to `openssl`.

use std::io::ErrorKind;
use std::process::Output;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::CertError;
use crate::fingerprint::parse_openssl_fingerprint;
use crate::{CertBackend, CertRequest};

/// Runs `openssl req` / `openssl x509`, each bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct OpensslBackend {
    program: String,
    timeout: Duration,
}

impl OpensslBackend {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Arguments for a P-256 self-signed certificate.
    pub fn req_args(request: &CertRequest) -> Vec<String> {
        vec![
            "req".into(),
            "-x509".into(),
            "-nodes".into(),
            "-newkey".into(),
            "ec".into(),
            "-pkeyopt".into(),
            "ec_paramgen_curve:prime256v1".into(),
            "-keyout".into(),
            request.key_path().to_string_lossy().into_owned(),
            "-out".into(),
            request.cert_path().to_string_lossy().into_owned(),
            "-days".into(),
            request.days.to_string(),
            "-subj".into(),
            request.subject(),
        ]
    }

    async fn run(&self, args: &[String]) -> Result<Output, CertError> {
        debug!(program = %self.program, ?args, "running certificate tool");
        let child = Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output();
        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(CertError::ToolMissing {
                    program: self.program.clone(),
                });
            }
            Ok(Err(e)) => return Err(CertError::Io(e)),
            Err(_) => {
                return Err(CertError::Timeout {
                    program: self.program.clone(),
                    timeout: self.timeout,
                });
            }
        };
        if !output.status.success() {
            return Err(CertError::ToolFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

#[async_trait]
impl CertBackend for OpensslBackend {
    fn name(&self) -> &'static str {
        "openssl"
    }

    async fn generate(&self, request: &CertRequest) -> Result<(), CertError> {
        self.run(&Self::req_args(request)).await.map(|_| ())
    }

    async fn fingerprint(&self, request: &CertRequest) -> Result<String, CertError> {
        let args = [
            "x509".to_string(),
            "-in".to_string(),
            request.cert_path().to_string_lossy().into_owned(),
            "-noout".to_string(),
            "-sha256".to_string(),
            "-fingerprint".to_string(),
        ];
        let output = self.run(&args).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_openssl_fingerprint(&stdout)
            .ok_or_else(|| CertError::Fingerprint(format!("unexpected output: {}", stdout.trim())))
    }
}
