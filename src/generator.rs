//! Generation run: resolve, generate secrets, provision, render, write.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use hysteria_cert::{CertBackend, CertRequest, backend_from_config, provision};
use hysteria_config::{Config, ConfigError};
use hysteria_core::{
    ANDROID_CLIENT_FILE, CertificateArtifact, GeneratedSecrets, IdentitySource, LINUX_CLIENT_FILE,
    PLACEHOLDER_IP, QR_CODE_FILE, SERVER_CONFIG_FILE, ServerIdentity,
};
use hysteria_net::IdentityResolver;
use hysteria_render::{QrEncoder, RenderContext, RenderError, android, linux, qr, server, uri};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{info, warn};

/// Fatal generation errors. Everything else degrades.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A step that fell back instead of producing its normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Identity,
    Certificate,
    QrCode,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Identity => "server address",
            Step::Certificate => "certificate",
            Step::QrCode => "qr code",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub step: Step,
    pub reason: String,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub identity: ServerIdentity,
    pub identity_source: IdentitySource,
    pub secrets: GeneratedSecrets,
    pub cert: CertificateArtifact,
    pub server_config: PathBuf,
    pub linux_config: PathBuf,
    pub android_config: PathBuf,
    pub qr_code: Option<PathBuf>,
    pub share_link: String,
    pub degraded: Vec<Degradation>,
}

impl GenerationReport {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Sequences one generation run.
///
/// Capabilities are injected at construction and never re-checked.
pub struct Generator {
    config: Config,
    resolver: IdentityResolver,
    cert_backend: Box<dyn CertBackend>,
    qr: Option<Box<dyn QrEncoder>>,
}

impl Generator {
    /// Wire up the resolver, certificate backend and QR encoder from `config`.
    pub fn new(config: Config) -> Self {
        let resolver = IdentityResolver::from_config(&config.discovery);
        let cert_backend = backend_from_config(&config.cert);
        Self {
            config,
            resolver,
            cert_backend,
            qr: qr::default_encoder(),
        }
    }

    pub fn with_resolver(mut self, resolver: IdentityResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_cert_backend(mut self, backend: Box<dyn CertBackend>) -> Self {
        self.cert_backend = backend;
        self
    }

    pub fn with_qr_encoder(mut self, encoder: Option<Box<dyn QrEncoder>>) -> Self {
        self.qr = encoder;
        self
    }

    pub async fn run(&self) -> Result<GenerationReport, GenerateError> {
        let mut degraded = Vec::new();

        let output_dir = prepare_output_dir(Path::new(&self.config.output.dir))?;
        println!("Output directory: {}", output_dir.display());

        let (ip, identity_source) = match &self.config.server.ip {
            Some(ip) => (ip.clone(), IdentitySource::Explicit),
            None => {
                let resolved = self.resolver.resolve().await;
                if resolved.source == IdentitySource::Placeholder {
                    degraded.push(Degradation {
                        step: Step::Identity,
                        reason: format!("no probe succeeded, using {PLACEHOLDER_IP}"),
                    });
                }
                (resolved.ip, resolved.source)
            }
        };
        let identity = ServerIdentity::new(ip, self.config.server.port);
        info!(ip = %identity.ip, port = identity.port, source = %identity_source, "server identity");
        println!("Server IP:   {} ({identity_source})", identity.ip);
        println!("Server port: {}", identity.port);
        println!();

        let secrets = GeneratedSecrets::generate();
        println!("Generated secrets:");
        for (label, secret) in [
            ("obfs password", &secrets.obfs),
            ("auth password", &secrets.auth),
            ("stats secret ", &secrets.stats),
        ] {
            println!(
                "  {label}: {}... ({} chars)",
                secret.preview(16),
                secret.len()
            );
        }
        println!();

        let cert = if self.config.output.cert {
            println!("Generating self-signed certificate (CN={})...", identity.ip);
            let request = CertRequest::new(identity.ip.clone(), &output_dir, &self.config.cert);
            let provisioned = provision(self.cert_backend.as_ref(), &request).await;
            if let Some(e) = &provisioned.failure {
                println!("  warning: {e}");
                degraded.push(Degradation {
                    step: Step::Certificate,
                    reason: e.to_string(),
                });
            } else {
                println!("  certificate: {}", provisioned.artifact.cert_path);
                println!("  private key: {}", provisioned.artifact.key_path);
                println!("  fingerprint: {}", provisioned.artifact.fingerprint);
            }
            provisioned.artifact
        } else {
            CertificateArtifact::placeholder()
        };
        println!();

        let generated_at = timestamp();
        let ctx = RenderContext {
            identity: &identity,
            secrets: &secrets,
            cert: &cert,
            server: &self.config.server,
            client: &self.config.client,
            generated_at: &generated_at,
        };

        let server_config = output_dir.join(SERVER_CONFIG_FILE);
        server::write(&ctx, &server_config)?;
        println!("Server config written:  {}", server_config.display());

        let linux_config = output_dir.join(LINUX_CLIENT_FILE);
        linux::write(&ctx, &linux_config)?;
        println!("Linux client written:   {}", linux_config.display());

        let android_config = output_dir.join(ANDROID_CLIENT_FILE);
        android::write(&ctx, &android_config)?;
        println!("Android client written: {}", android_config.display());

        let share_link = uri::share_link(&ctx);

        let qr_code = if self.config.output.qr {
            let path = output_dir.join(QR_CODE_FILE);
            match &self.qr {
                Some(encoder) => match encoder.encode_to_file(&share_link, &path) {
                    Ok(()) => {
                        println!("QR code written:        {}", path.display());
                        Some(path)
                    }
                    Err(e) => {
                        warn!(error = %e, "qr code generation failed");
                        degraded.push(Degradation {
                            step: Step::QrCode,
                            reason: e.to_string(),
                        });
                        None
                    }
                },
                None => {
                    warn!("qr encoder not available in this build, skipping qr code");
                    degraded.push(Degradation {
                        step: Step::QrCode,
                        reason: "qr encoder not available (built without the `qr` feature)"
                            .to_string(),
                    });
                    None
                }
            }
        } else {
            None
        };
        println!();

        Ok(GenerationReport {
            output_dir,
            identity,
            identity_source,
            secrets,
            cert,
            server_config,
            linux_config,
            android_config,
            qr_code,
            share_link,
            degraded,
        })
    }
}

/// Create `dir` if needed and return its absolute form.
fn prepare_output_dir(dir: &Path) -> Result<PathBuf, GenerateError> {
    let wrap = |source| GenerateError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(wrap)?;
    std::path::absolute(dir).map_err(wrap)
}

fn timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    now.format(&format).unwrap_or_else(|_| now.to_string())
}
