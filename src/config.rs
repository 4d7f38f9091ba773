use std::env;

use anyhow::{Context, Result};

/// Default per-document ceiling: 5 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so everything here can
/// also be set there.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (PORT)
    pub port: u16,
    /// HTTP bind address (DOCSIM_BIND)
    pub bind: String,
    /// Origin allowed by CORS, with credentials (FRONTEND_URL)
    pub frontend_url: String,
    /// Largest accepted document in bytes (DOCSIM_MAX_DOCUMENT_BYTES)
    pub max_document_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind: "0.0.0.0".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; only malformed numbers are an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in `load`).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            bind: get("DOCSIM_BIND").unwrap_or(defaults.bind),
            frontend_url: get("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            max_document_bytes: document_limit_from_lookup(&get)?,
        })
    }

    /// Only the per-document ceiling, for callers that never open a socket.
    pub fn load_document_limit() -> Result<usize> {
        document_limit_from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Request body ceiling: two documents plus room for multipart framing.
    pub fn max_body_bytes(&self) -> usize {
        self.max_document_bytes
            .saturating_mul(2)
            .saturating_add(64 * 1024)
    }
}

fn document_limit_from_lookup(get: &impl Fn(&str) -> Option<String>) -> Result<usize> {
    let limit = match get("DOCSIM_MAX_DOCUMENT_BYTES") {
        Some(raw) => raw.trim().parse().with_context(|| {
            format!("DOCSIM_MAX_DOCUMENT_BYTES must be a byte count, got {raw:?}")
        })?,
        None => DEFAULT_MAX_DOCUMENT_BYTES,
    };

    if limit == 0 {
        anyhow::bail!("DOCSIM_MAX_DOCUMENT_BYTES must be greater than zero");
    }
    Ok(limit)
}
