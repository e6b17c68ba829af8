//! Application configuration
//!
//! Settings come from an optional YAML file named by `FILMGRAPH_CONFIG`, then
//! environment variables override individual fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Connection settings for a Neo4j server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Neo4jConfig {
    /// Base HTTP URL, e.g. `http://localhost:7474`
    pub url: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:7474".to_string(),
            database: "neo4j".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
        }
    }
}

/// Which graph engine to query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// In-process store, optionally seeded from a dataset file
    Embedded {
        #[serde(default)]
        dataset: Option<PathBuf>,
    },
    Neo4j(Neo4jConfig),
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::Embedded { dataset: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    /// Key required by protected routes. Unset means those routes always refuse.
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Parse a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Config file named by `FILMGRAPH_CONFIG` (defaults otherwise) with
    /// process environment overrides applied
    pub fn load() -> Result<Self, ConfigError> {
        let lookup = |name: &str| std::env::var(name).ok();
        let mut config = match lookup("FILMGRAPH_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Override fields from environment variables read through `lookup`.
    ///
    /// Setting `NEO4J_URL` switches an embedded backend to Neo4j.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("FILMGRAPH_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "FILMGRAPH_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(key) = lookup("API_KEY") {
            self.api_key = Some(key);
        }

        let neo4j_vars = ["NEO4J_URL", "NEO4J_DATABASE", "NEO4J_USER", "NEO4J_PASSWORD"];
        if matches!(self.backend, BackendConfig::Embedded { .. }) {
            if lookup("NEO4J_URL").is_none() {
                return Ok(());
            }
            self.backend = BackendConfig::Neo4j(Neo4jConfig::default());
        }
        if let BackendConfig::Neo4j(neo4j) = &mut self.backend {
            for name in neo4j_vars {
                let Some(value) = lookup(name) else { continue };
                match name {
                    "NEO4J_URL" => neo4j.url = value,
                    "NEO4J_DATABASE" => neo4j.database = value,
                    "NEO4J_USER" => neo4j.user = value,
                    _ => neo4j.password = value,
                }
            }
        }
        Ok(())
    }
}
