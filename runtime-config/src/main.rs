use std::path::PathBuf;

use clap::Parser;
use runtime_config::runner::{RunOverrides, run, setup_logging};

/// Resolve PARAM_* indirections through SSM and emit the validated config.
#[derive(Parser, Debug)]
#[command(name = "resolve-config", version, about)]
struct Cli {
    /// Indirection key to resolve, e.g. PARAM_DB_PASS (repeatable)
    #[arg(short, long = "param")]
    params: Vec<String>,

    /// Key the emitted config must contain (repeatable)
    #[arg(short, long = "require")]
    require: Vec<String>,

    /// Environment file loaded before resolving
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// POST the config as JSON here instead of printing it
    #[arg(long)]
    post_url: Option<String>,

    /// Timeout for the POST in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli = Cli::parse();
    run(RunOverrides {
        env_file: cli.env_file,
        required_params: cli.params,
        required_vars: cli.require,
        post_url: cli.post_url,
        timeout_ms: cli.timeout_ms,
    })
    .await?;

    Ok(())
}
