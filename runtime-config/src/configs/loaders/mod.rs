pub mod aws_parameter_store;
pub mod environment;

pub use aws_parameter_store::SsmParameterStore;
