/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed CLI flags and sub-commands
[POS]:    CLI layer - argument definitions
[UPDATE]: When changing CLI flags or sub-commands
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gs2", version, about = "Signed requests against GS2 services")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    /// Validate the configuration and build the client, then exit
    #[arg(long = "dry-run")]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the signature for a module/function pair
    Sign {
        #[arg(long)]
        module: String,
        #[arg(long)]
        function: String,
        /// Unix seconds; defaults to now
        #[arg(long)]
        timestamp: Option<i64>,
    },
    Get(TargetArgs),
    Delete(TargetArgs),
    Post(BodyArgs),
    Put(BodyArgs),
}

/// Where a request goes and how it is sent
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    #[arg(long)]
    pub service: String,
    #[arg(long)]
    pub module: String,
    #[arg(long)]
    pub function: String,
    #[arg(long)]
    pub path: String,
    /// Query parameter, repeatable
    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub query: Vec<(String, String)>,
    /// Extra header, repeatable
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub headers: Vec<(String, String)>,
    #[arg(long = "request-id")]
    pub request_id: Option<String>,
    #[arg(long = "access-token")]
    pub access_token: Option<String>,
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// JSON request body
    #[arg(long)]
    pub body: String,
}

pub fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
