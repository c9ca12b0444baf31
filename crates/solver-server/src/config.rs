//! Server configuration
//!
//! Defaults serve the local development setup; a TOML file named by the
//! `SOLVER_CONFIG` environment variable overrides them.

use std::net::SocketAddr;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Exact origin allowed for cross-origin requests; `None` allows any.
    pub allowed_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5050,
            allowed_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("SOLVER_CONFIG") {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                toml::from_str(&contents)
                    .with_context(|| format!("failed to parse config file {path}"))
            }
            Err(_) => Ok(ServerConfig::default()),
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
