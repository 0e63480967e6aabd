//! Runtime configuration for the API server.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default bind host.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port.
const DEFAULT_PORT: u16 = 8000;

/// Default roster file, relative to the working directory.
const DEFAULT_DATA_FILE: &str = "patients.json";

/// Server configuration, read from `PATIENTS_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self> {
        let host = env::var("PATIENTS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PATIENTS_PORT") {
            Ok(raw) => raw
                .parse()
                .context("PATIENTS_PORT must be a TCP port number")?,
            Err(_) => DEFAULT_PORT,
        };
        let data_file = env::var("PATIENTS_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        Ok(Self {
            host,
            port,
            data_file,
        })
    }

    /// Socket address the server binds.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
