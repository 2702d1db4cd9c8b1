//! Configuration loading.
//!
//! The database location is resolved with the precedence: CLI flag,
//! then the `CAREERHUB_DATABASE_PATH` environment variable, then the
//! configuration file, then an XDG-style default. The resolved path is
//! passed explicitly to the data layer's constructor; there is no
//! ambient state.

use std::env;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "CAREERHUB_DATABASE_PATH";

/// Configuration errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(careerhub::config::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    #[diagnostic(code(careerhub::config::parse))]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Application configuration, deserialized from a YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the database path for this run.
    pub fn resolve_database_path(&self, flag: Option<PathBuf>) -> PathBuf {
        let env_path = env::var_os(DB_PATH_ENV).map(PathBuf::from);
        pick_database_path(flag, env_path, self.database.path.clone())
    }
}

/// Precedence: flag beats environment beats config file beats default.
fn pick_database_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: Option<PathBuf>,
) -> PathBuf {
    flag.or(env)
        .or(config)
        .unwrap_or_else(default_database_path)
}

/// XDG-compliant default: `~/.local/share/careerhub/careerhub.db`.
pub fn default_database_path() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".local/share")
        });

    data_home.join("careerhub").join("careerhub.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_everything() {
        let picked = pick_database_path(
            Some(PathBuf::from("/from/flag.db")),
            Some(PathBuf::from("/from/env.db")),
            Some(PathBuf::from("/from/config.db")),
        );
        assert_eq!(picked, PathBuf::from("/from/flag.db"));
    }

    #[test]
    fn environment_beats_config_file() {
        let picked = pick_database_path(
            None,
            Some(PathBuf::from("/from/env.db")),
            Some(PathBuf::from("/from/config.db")),
        );
        assert_eq!(picked, PathBuf::from("/from/env.db"));
    }

    #[test]
    fn config_file_beats_default() {
        let picked = pick_database_path(None, None, Some(PathBuf::from("/from/config.db")));
        assert_eq!(picked, PathBuf::from("/from/config.db"));
    }

    #[test]
    fn default_path_ends_with_careerhub_db() {
        let picked = pick_database_path(None, None, None);
        assert!(picked.ends_with("careerhub/careerhub.db"));
    }

    #[test]
    fn from_file_parses_database_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "database:\n  path: /var/lib/careerhub.db\n").unwrap();

        let config = Config::from_file(&path).expect("Parse should succeed");
        assert_eq!(
            config.database.path,
            Some(PathBuf::from("/var/lib/careerhub.db"))
        );
    }

    #[test]
    fn from_file_reports_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn from_file_reports_malformed_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "database: [not a mapping").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
