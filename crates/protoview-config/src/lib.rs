//! Listener and cross-origin settings for the protoview server.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind host: {0}")]
    InvalidHost(String),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Invalid allowed origin: {0}")]
    InvalidOrigin(String),

    #[error("At least one allowed origin is required")]
    NoOrigins,
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.into()],
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Replaces the allowed origin list.
    pub fn with_allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::NoOrigins);
        }
        for origin in &self.allowed_origins {
            validate_origin(origin)?;
        }
        Ok(())
    }

    /// Socket address to bind. Port 0 is rejected; tests bind their own listener.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// An origin is `scheme://host[:port]` with no path, query, or trailing slash.
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidOrigin(origin.to_string());

    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(invalid)?;

    let bad_char = |c: char| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#');
    if rest.is_empty() || rest.contains(bad_char) {
        return Err(invalid());
    }

    if let Some((_, port)) = rest.rsplit_once(':') {
        if !rest.ends_with(']') && port.parse::<u16>().is_err() {
            return Err(invalid());
        }
    }

    Ok(())
}
