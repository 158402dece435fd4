//! Server configuration.
//!
//! Values come from `INVENTORY_*` environment variables; `main` loads an
//! optional `.env` file first.

use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "INVENTORY_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Falls back to the build default when unset.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Falls back to `<cwd>/logs` when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("inventory.sqlite3")
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(inventory_core::default_log_level())
    }

    /// Absolute log directory, resolving relative paths against the working
    /// directory.
    pub fn resolved_log_dir(&self) -> std::io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.join("logs"),
        })
    }
}
