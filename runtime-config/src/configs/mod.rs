pub mod aws;
pub mod loaders;
pub mod post;

pub use aws::AwsConfig;
pub use post::PostConfig;

use crate::{configs::loaders::environment::list_env, error::Result};

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self>;
}

/// Settings for a resolver run, read from the process environment.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// `PARAM_*` keys that must end up resolved.
    pub required_params: Vec<String>,
    /// Final keys the config object is restricted to.
    pub required_vars: Vec<String>,
    pub aws_config: AwsConfig,
    pub post_config: PostConfig,
}

#[async_trait::async_trait]
impl Configs for ResolverConfig {
    async fn load() -> Result<Self> {
        Ok(Self {
            required_params: list_env("REQUIRED_PARAMS"),
            required_vars: list_env("REQUIRED_VARS"),
            aws_config: AwsConfig::load().await?,
            post_config: PostConfig::load().await?,
        })
    }
}
