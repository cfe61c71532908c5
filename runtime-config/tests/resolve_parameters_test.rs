use std::sync::atomic::{AtomicUsize, Ordering};

use runtime_config::{
    ConfigError, Environment, ParameterBatch, ParameterStore, build_config, error::BoxError,
    parameters::Parameter, resolve_parameters,
};

/// Mimics SSM: known names resolve, unknown names come back as invalid.
struct FakeSsm {
    known: Vec<(&'static str, &'static str)>,
    calls: AtomicUsize,
}

impl FakeSsm {
    fn new(known: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            known,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl ParameterStore for FakeSsm {
    async fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<ParameterBatch, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(with_decryption, "parameters must be requested decrypted");

        let mut batch = ParameterBatch::default();
        for name in names {
            match self.known.iter().find(|(k, _)| k == name) {
                Some((k, v)) => batch.parameters.push(Parameter::new(*k, *v)),
                None => batch.invalid_parameters.push(name.clone()),
            }
        }
        Ok(batch)
    }
}

fn startup_env() -> Environment {
    [
        ("DB_HOST", "db.internal"),
        ("PARAM_DB_PASS", "/prod/db/password"),
        ("PARAM_API_TOKEN", "/prod/api/token"),
        ("LOG_LEVEL", "info"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[tokio::test]
async fn test_startup_flow_resolves_then_builds_config() {
    let env = startup_env();
    let ssm = FakeSsm::new(vec![
        ("/prod/db/password", "hunter2"),
        ("/prod/api/token", "tok"),
    ]);

    let resolved = resolve_parameters(&env, &["PARAM_DB_PASS", "PARAM_API_TOKEN"], &ssm)
        .await
        .unwrap();
    let config = build_config(&resolved, &["DB_HOST", "DB_PASS", "API_TOKEN"]).unwrap();

    assert_eq!(ssm.calls.load(Ordering::SeqCst), 1);
    assert_eq!(config.len(), 3);
    assert_eq!(config["DB_PASS"], "hunter2");
    assert_eq!(config["API_TOKEN"], "tok");
    assert!(!config.contains_key("LOG_LEVEL"));
}

#[tokio::test]
async fn test_second_resolution_does_not_hit_store() {
    let env = startup_env();
    let ssm = FakeSsm::new(vec![
        ("/prod/db/password", "hunter2"),
        ("/prod/api/token", "tok"),
    ]);
    let keys = ["PARAM_DB_PASS", "PARAM_API_TOKEN"];

    let first = resolve_parameters(&env, &keys, &ssm).await.unwrap();
    let second = resolve_parameters(&first, &keys, &ssm).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(ssm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_parameter_aborts_without_partial_merge() {
    let env = startup_env();
    let ssm = FakeSsm::new(vec![("/prod/db/password", "hunter2")]);

    let err = resolve_parameters(&env, &["PARAM_DB_PASS", "PARAM_API_TOKEN"], &ssm)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed retrieving SSM parameters: /prod/api/token"
    );
    assert!(matches!(err, ConfigError::ParameterRetrievalFailed { .. }));
    assert!(!env.contains_key("DB_PASS"));
}
