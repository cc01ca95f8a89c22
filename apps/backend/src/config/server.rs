use std::env;

use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Validated origins; empty means the local dev defaults.
    pub cors_allowed_origins: Vec<String>,
    pub upload_max_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
            upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT`, `CORS_ALLOWED_ORIGINS` and
    /// `UPLOAD_MAX_BYTES`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("BACKEND_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_var(&lookup, "BACKEND_PORT")?.unwrap_or(defaults.port),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_allowed_origins(&raw))
                .unwrap_or_default(),
            upload_max_bytes: parse_var(&lookup, "UPLOAD_MAX_BYTES")?
                .unwrap_or(defaults.upload_max_bytes),
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, AppError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
    }
}
