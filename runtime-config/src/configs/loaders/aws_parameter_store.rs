use aws_config::{self, BehaviorVersion};
use aws_sdk_ssm::{self, Client};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::AwsConfig,
    error::BoxError,
    parameters::{Parameter, ParameterBatch, ParameterStore},
};

/// Parameter store backed by AWS Systems Manager `GetParameters`.
#[derive(Clone, Debug)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS credential chain, applying the
    /// region, profile and endpoint overrides from `config`.
    pub async fn from_config(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::v2025_08_07());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_ssm::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!("Using SSM endpoint override {}", endpoint_url);
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<ParameterBatch, BoxError> {
        debug!("Requesting {} parameter(s) from SSM", names.len());

        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(aws_sdk_ssm::Error::from)?;

        let parameters = output
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(Parameter::new(name, value)),
                _ => None,
            })
            .collect();

        Ok(ParameterBatch {
            parameters,
            invalid_parameters: output.invalid_parameters().to_vec(),
        })
    }
}
