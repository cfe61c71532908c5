use std::collections::{BTreeMap, HashMap};

use crate::error::{ConfigError, Result};

/// Prefix marking an indirection key: `PARAM_DB_PASS` holds the name of the
/// SSM parameter whose value ends up under `DB_PASS`.
pub const PARAM_PREFIX: &str = "PARAM_";

/// Snapshot of the process configuration. A key that is not present is absent.
pub type Environment = HashMap<String, String>;

/// Validated configuration handed to application code.
pub type Config = BTreeMap<String, String>;

/// A key counts as set only when it is present and non-empty.
pub fn is_set(env: &Environment, key: &str) -> bool {
    env.get(key).is_some_and(|value| !value.is_empty())
}

/// Target key of an indirection key. Only the first occurrence of the prefix is removed.
pub fn strip_param_prefix(key: &str) -> String {
    key.replacen(PARAM_PREFIX, "", 1)
}

/// Fails with every key in `keys` that is not set in `env`, in the order given.
pub fn validate_required<S: AsRef<str>>(env: &Environment, keys: &[S]) -> Result<()> {
    let mut missing = Vec::new();
    for key in keys {
        let key = key.as_ref();
        if !is_set(env, key) {
            missing.push(key.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingConfiguration { keys: missing })
    }
}

/// Validates `keys` and returns a config restricted to exactly those keys.
pub fn build_config<S: AsRef<str>>(env: &Environment, keys: &[S]) -> Result<Config> {
    validate_required(env, keys)?;

    let mut config = Config::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = env.get(key) {
            config.insert(key.to_string(), value.clone());
        }
    }
    Ok(config)
}
