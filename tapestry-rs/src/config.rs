//! Output and server settings.
//!
//! Both configs have sensible defaults and can be overridden from the
//! environment with `TAPESTRY_OUTPUT`, `TAPESTRY_HOST` and `TAPESTRY_PORT`.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_OUTPUT: &str = "./index.html";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

const OUTPUT_VAR: &str = "TAPESTRY_OUTPUT";
const HOST_VAR: &str = "TAPESTRY_HOST";
const PORT_VAR: &str = "TAPESTRY_PORT";

/// Where a static build is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BuildConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(OUTPUT_VAR)
            .filter(|output| !output.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

/// Address the live server binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServeConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Defaults with any `TAPESTRY_HOST` / `TAPESTRY_PORT` overrides applied
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR).filter(|host| !host.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| Error::Config {
                key: PORT_VAR,
                value: port,
            })?;
        }
        Ok(config)
    }

    /// `host:port`, bracketing IPv6 literals
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
