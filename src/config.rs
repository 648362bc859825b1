// src/config.rs
//
// Runtime configuration, read from DOGSHELTER_* environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

pub const ENV_DATA_DIR: &str = "DOGSHELTER_DATA_DIR";
pub const ENV_STORE: &str = "DOGSHELTER_STORE";
pub const ENV_SEED: &str = "DOGSHELTER_SEED";
pub const ENV_LOG: &str = "DOGSHELTER_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Which ShelterStore backs the lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Sqlite,
    Json,
    /// Nothing is persisted
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "db" => Ok(StoreKind::Sqlite),
            "json" => Ok(StoreKind::Json),
            "memory" | "none" => Ok(StoreKind::Memory),
            other => Err(format!(
                "unknown store '{}' (expected sqlite, json or memory)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelterConfig {
    pub data_dir: PathBuf,
    pub store: StoreKind,
    /// Seed the demo dogs when the loaded shelter is empty
    pub seed_demo_dogs: bool,
    pub log_filter: String,
}

impl ShelterConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };

        let store = match lookup(ENV_STORE) {
            Some(raw) => raw.parse::<StoreKind>().map_err(|e| invalid(ENV_STORE, &e))?,
            None => StoreKind::default(),
        };

        let seed_demo_dogs = match lookup(ENV_SEED) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                invalid(ENV_SEED, &format!("expected true or false, got '{}'", raw))
            })?,
            None => true,
        };

        let log_filter = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            store,
            seed_demo_dogs,
            log_filter,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("dogshelter.db")
    }
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store: StoreKind::default(),
            seed_demo_dogs: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Platform data directory, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dogshelter")
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(variable: &str, reason: &str) -> AppError {
    AppError::Other(format!("Invalid {}: {}", variable, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppResult<ShelterConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShelterConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.store, StoreKind::Sqlite);
        assert!(config.seed_demo_dogs);
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.ends_with("dogshelter"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            (ENV_DATA_DIR, "/tmp/shelter"),
            (ENV_STORE, "JSON"),
            (ENV_SEED, "no"),
            (ENV_LOG, "dogshelter=debug"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/shelter"));
        assert_eq!(config.store, StoreKind::Json);
        assert!(!config.seed_demo_dogs);
        assert_eq!(config.log_filter, "dogshelter=debug");
        assert_eq!(config.database_path(), PathBuf::from("/tmp/shelter/dogshelter.db"));
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = config(&[(ENV_STORE, "redis")]).unwrap_err();
        assert!(err.to_string().contains(ENV_STORE));

        let err = config(&[(ENV_SEED, "maybe")]).unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));
    }
}
