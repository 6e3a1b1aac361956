//! Random secret generation.
//!
//! Secrets are drawn from the OS CSPRNG. A fixed seed is never used, so two
//! runs never share passwords.

use std::fmt;

use rand::Rng;
use rand::distributions::Uniform;
use rand::rngs::OsRng;

use crate::defaults::{AUTH_PASSWORD_LEN, OBFS_PASSWORD_LEN, STATS_SECRET_LEN};

/// Characters a generated secret may contain.
pub const SECRET_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// A generated secret string.
///
/// `Debug` is redacted so secrets do not leak through log fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// The full secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The first `n` characters, for progress output.
    pub fn preview(&self, n: usize) -> &str {
        match self.0.char_indices().nth(n) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} chars>)", self.len())
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Generate a secret of exactly `len` characters from [`SECRET_ALPHABET`].
pub fn generate_secret(len: usize) -> Secret {
    let dist = Uniform::from(0..SECRET_ALPHABET.len());
    let value = OsRng
        .sample_iter(dist)
        .take(len)
        .map(|idx| SECRET_ALPHABET[idx] as char)
        .collect();
    Secret(value)
}

/// The three secrets of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedSecrets {
    /// Salamander obfuscation password.
    pub obfs: Secret,
    /// Client authentication password.
    pub auth: Secret,
    /// Traffic stats API secret.
    pub stats: Secret,
}

impl GeneratedSecrets {
    pub fn generate() -> Self {
        Self {
            obfs: generate_secret(OBFS_PASSWORD_LEN),
            auth: generate_secret(AUTH_PASSWORD_LEN),
            stats: generate_secret(STATS_SECRET_LEN),
        }
    }
}
