use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_cities_path() -> PathBuf { PathBuf::from("data/energy.csv") }
fn default_panels_path() -> PathBuf { PathBuf::from("data/solar.csv") }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PORT must be a port number, got {0:?}")]
    Port(String),

    #[error("invalid listen host {0:?}")]
    Host(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_cities_path")]
    pub cities_path: PathBuf,
    #[serde(default = "default_panels_path")]
    pub panels_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cities_path: default_cities_path(),
            panels_path: default_panels_path(),
        }
    }
}

impl Config {
    /// Reads the JSON config, then lets a non-empty `PORT` env var override
    /// the listen port.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.with_port_override(std::env::var("PORT").ok().as_deref())
    }

    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        match port.map(str::trim) {
            Some(p) if !p.is_empty() => {
                self.server.port = p.parse().map_err(|_| ConfigError::Port(p.to_string()))?;
            }
            _ => {}
        }
        Ok(self)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::Host(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
