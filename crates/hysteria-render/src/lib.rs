//! Template rendering for hysteria-gen.
//!
//! Every renderer is a pure function of a [`RenderContext`]; the `write`
//! companions persist the result and hand the content back. One context is
//! built per run and shared by all renderers, so every artifact agrees on the
//! server address, port and secrets.

pub mod android;
pub mod context;
pub mod error;
pub mod linux;
pub mod qr;
pub mod server;
pub mod uri;
mod yaml;

pub use context::RenderContext;
pub use error::RenderError;
pub use qr::QrEncoder;
#[cfg(feature = "qr")]
pub use qr::PngQrEncoder;

/// Write `contents` to `path`, attaching the path to any I/O error.
pub(crate) fn write_file(path: &std::path::Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
