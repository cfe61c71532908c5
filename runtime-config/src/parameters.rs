use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{
    environment::{Environment, is_set, strip_param_prefix, validate_required},
    error::{BoxError, ConfigError, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of a batch lookup. Names the store could not find are reported in
/// `invalid_parameters` instead of failing the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBatch {
    pub parameters: Vec<Parameter>,
    pub invalid_parameters: Vec<String>,
}

#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> std::result::Result<ParameterBatch, BoxError>;
}

/// Resolves `PARAM_*` indirection keys through `store`.
///
/// Keys whose target (the key without `PARAM_`) is already set are left alone.
/// The remaining indirections are fetched in one batch and their values are
/// stored under the target keys of a copy of `env`; `env` itself is never
/// modified. Any failure aborts the whole call without merging anything.
pub async fn resolve_parameters<S, P>(
    env: &Environment,
    required_params: &[S],
    store: &P,
) -> Result<Environment>
where
    S: AsRef<str>,
    P: ParameterStore + ?Sized,
{
    let unresolved: Vec<&str> = required_params
        .iter()
        .map(|key| key.as_ref())
        .filter(|key| !is_set(env, &strip_param_prefix(key)))
        .collect();

    if unresolved.is_empty() {
        debug!("All required parameters already present in environment");
        return Ok(env.clone());
    }
    debug!("Parameters needing resolution: {}", unresolved.join(", "));

    validate_required(env, &unresolved)?;

    // Last indirection wins when two keys point at the same parameter name.
    let mut reverse_lookup: HashMap<&str, &str> = HashMap::with_capacity(unresolved.len());
    let mut names = Vec::with_capacity(unresolved.len());
    for &key in &unresolved {
        let name = env.get(key).map(String::as_str).unwrap_or_default();
        if let Some(shadowed) = reverse_lookup.insert(name, key) {
            warn!(
                "Parameter '{}' is referenced by both {} and {}; {} will not be populated",
                name,
                shadowed,
                key,
                strip_param_prefix(shadowed)
            );
        }
        names.push(name.to_string());
    }

    let batch = store
        .get_parameters(&names, true)
        .await
        .map_err(ConfigError::ParameterStore)?;

    if !batch.invalid_parameters.is_empty() {
        return Err(ConfigError::ParameterRetrievalFailed {
            names: batch.invalid_parameters,
        });
    }

    let mut resolved = env.clone();
    for parameter in batch.parameters {
        match reverse_lookup.get(parameter.name.as_str()) {
            Some(key) => {
                resolved.insert(strip_param_prefix(key), parameter.value);
            }
            None => warn!(
                "Parameter store returned '{}' which was not requested",
                parameter.name
            ),
        }
    }

    let targets: Vec<String> = unresolved.iter().map(|key| strip_param_prefix(key)).collect();
    validate_required(&resolved, &targets)?;

    info!("Resolved {} parameter(s) from parameter store", names.len());
    Ok(resolved)
}
