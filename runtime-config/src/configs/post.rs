use std::time::Duration;

use super::{
    Configs,
    loaders::environment::{env_or, optional_env},
};
use crate::{
    error::{ConfigError, Result},
    http::DEFAULT_POST_TIMEOUT,
};

#[derive(Debug, Clone)]
pub struct PostConfig {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: DEFAULT_POST_TIMEOUT,
        }
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidSetting {
            name: "POST_TIMEOUT_MS".to_string(),
            reason: e.to_string(),
        })
}

#[async_trait::async_trait]
impl Configs for PostConfig {
    async fn load() -> Result<Self> {
        let default_ms = DEFAULT_POST_TIMEOUT.as_millis().to_string();

        Ok(PostConfig {
            url: optional_env("POST_URL"),
            timeout: parse_timeout_ms(&env_or("POST_TIMEOUT_MS", &default_ms))?,
        })
    }
}
