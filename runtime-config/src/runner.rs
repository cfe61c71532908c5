use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{Configs, ResolverConfig, loaders::SsmParameterStore, loaders::environment},
    environment::{Config, Environment, build_config, strip_param_prefix},
    error::Result,
    http::UrlPoster,
    parameters::{ParameterStore, resolve_parameters},
};

pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

/// Command line overrides layered on top of [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub env_file: Option<PathBuf>,
    pub required_params: Vec<String>,
    pub required_vars: Vec<String>,
    pub post_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl RunOverrides {
    pub fn apply(self, mut config: ResolverConfig) -> ResolverConfig {
        if !self.required_params.is_empty() {
            config.required_params = self.required_params;
        }
        if !self.required_vars.is_empty() {
            config.required_vars = self.required_vars;
        }
        if self.post_url.is_some() {
            config.post_config.url = self.post_url;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.post_config.timeout = std::time::Duration::from_millis(timeout_ms);
        }
        config
    }
}

/// Resolves indirections through `store` and restricts the result to the
/// required keys. Without required keys every resolved target is kept.
pub async fn resolve_config<P>(
    env: &Environment,
    config: &ResolverConfig,
    store: &P,
) -> Result<Config>
where
    P: ParameterStore + ?Sized,
{
    let resolved = resolve_parameters(env, &config.required_params, store).await?;

    if config.required_vars.is_empty() {
        let targets: Vec<String> = config
            .required_params
            .iter()
            .map(|key| strip_param_prefix(key))
            .collect();
        return build_config(&resolved, &targets);
    }
    build_config(&resolved, &config.required_vars)
}

/// Loads the environment (with the optional env file) and the settings the
/// run works from.
pub async fn prepare(overrides: RunOverrides) -> Result<(Environment, ResolverConfig)> {
    let env = environment::snapshot_with_dotenv(overrides.env_file.as_deref())?;
    let config = overrides.apply(ResolverConfig::load().await?);
    debug!(
        "Resolving {} parameter(s), {} required variable(s)",
        config.required_params.len(),
        config.required_vars.len()
    );
    Ok((env, config))
}

/// Builds the config object and delivers it: POSTed as JSON when a URL is
/// configured, printed to stdout otherwise. Without a store the environment
/// is used as is.
pub async fn execute(
    env: &Environment,
    config: &ResolverConfig,
    store: Option<&dyn ParameterStore>,
) -> Result<Config> {
    let resolved = match store {
        Some(store) => resolve_config(env, config, store).await?,
        None => build_config(env, &config.required_vars)?,
    };

    match &config.post_config.url {
        Some(url) => {
            let poster = UrlPoster::default().with_timeout(config.post_config.timeout);
            let response = poster.post_json(url, &resolved).await?;
            info!(
                "Delivered {} key(s) to {} ({})",
                resolved.len(),
                url,
                response.status()
            );
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }

    Ok(resolved)
}

pub async fn run(overrides: RunOverrides) -> Result<()> {
    let (env, config) = prepare(overrides).await?;

    if config.required_params.is_empty() {
        execute(&env, &config, None).await?;
    } else {
        let store = SsmParameterStore::from_config(&config.aws_config).await;
        execute(&env, &config, Some(&store)).await?;
    }
    Ok(())
}
