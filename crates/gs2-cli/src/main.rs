/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Signature or decoded JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gs2_cli::{build_client, execute, Cli, CliConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting gs2"
    );

    let config = load_config(&args.config_path)?;
    info!(region = %config.region, "configuration loaded");

    if args.dry_run {
        build_client(&config)?;
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a command is required unless --dry-run is given")?;
    let output = execute(command, &config).await?;
    println!("{output}");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
