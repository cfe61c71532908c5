//! Runtime configuration resolution.
//!
//! Values already present in the environment win; `PARAM_*` indirection keys
//! are otherwise resolved through AWS SSM Parameter Store. The validated
//! result is a plain key/value [`Config`](environment::Config).

pub mod configs;
pub mod environment;
pub mod error;
pub mod http;
pub mod parameters;
pub mod runner;

pub use environment::{Config, Environment, build_config, validate_required};
pub use error::{ConfigError, Result};
pub use http::{UrlPoster, post_url};
pub use parameters::{Parameter, ParameterBatch, ParameterStore, resolve_parameters};
