use std::{env, path::Path};

use tracing::debug;

use crate::{
    environment::Environment,
    error::{ConfigError, Result},
};

/// Value of `env_name`; unset and empty are both treated as absent.
pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok().filter(|value| !value.is_empty())
}

pub fn env_or(env_name: &str, default: &str) -> String {
    optional_env(env_name).unwrap_or_else(|| default.to_string())
}

/// Comma separated list, blank entries dropped.
pub fn list_env(env_name: &str) -> Vec<String> {
    optional_env(env_name)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Copy of the current process environment. Entries that are not valid
/// UTF-8 are skipped.
pub fn snapshot() -> Environment {
    env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Loads a dotenv file into the process environment, then snapshots it.
///
/// Without `path` the usual `.env` lookup applies and a missing file is fine.
/// An explicit `path` that cannot be read is an error.
pub fn snapshot_with_dotenv(path: Option<&Path>) -> Result<Environment> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| ConfigError::InvalidSetting {
                name: path.display().to_string(),
                reason: e.to_string(),
            })?;
            debug!("Loaded environment file {}", path.display());
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                debug!("Loaded environment file {}", path.display());
            }
        }
    }
    Ok(snapshot())
}
