/*
[INPUT]:  Parsed sub-command and loaded configuration
[OUTPUT]: Text to print (signature or pretty JSON)
[POS]:    CLI layer - command execution
[UPDATE]: When adding sub-commands or changing output format
*/

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use gs2_client::{Endpoint, Gs2Client, RequestOptions, RequestSigner};
use serde_json::Value;
use tracing::info;

use crate::cli::{BodyArgs, Command, TargetArgs};
use crate::config::CliConfig;

/// Build a client from the loaded configuration
pub fn build_client(config: &CliConfig) -> Result<Gs2Client> {
    Gs2Client::with_config(config.credentials.clone(), config.client_config())
        .context("build gs2 client")
}

/// Run one sub-command and return what should be printed
pub async fn execute(command: Command, config: &CliConfig) -> Result<String> {
    match command {
        Command::Sign {
            module,
            function,
            timestamp,
        } => {
            let signer = RequestSigner::from_credentials(&config.credentials)
                .context("load client secret")?;
            let timestamp = timestamp.unwrap_or_else(|| Utc::now().timestamp());
            Ok(signer.sign(&module, &function, timestamp))
        }
        Command::Get(target) => {
            let client = build_client(config)?;
            let query = query_pairs(&target);
            let options = request_options(&target);
            let value = client
                .get(endpoint(&target), &target.path, &query, Some(&options))
                .await?;
            render(&value)
        }
        Command::Delete(target) => {
            let client = build_client(config)?;
            let query = query_pairs(&target);
            let options = request_options(&target);
            let value = client
                .delete(endpoint(&target), &target.path, &query, Some(&options))
                .await?;
            render(&value)
        }
        Command::Post(args) => {
            let client = build_client(config)?;
            let body = parse_body(&args)?;
            let target = &args.target;
            let query = query_pairs(target);
            let options = request_options(target);
            let value = client
                .post(endpoint(target), &target.path, Some(&body), &query, Some(&options))
                .await?;
            render(&value)
        }
        Command::Put(args) => {
            let client = build_client(config)?;
            let body = parse_body(&args)?;
            let target = &args.target;
            let query = query_pairs(target);
            let options = request_options(target);
            let value = client
                .put(endpoint(target), &target.path, Some(&body), &query, Some(&options))
                .await?;
            render(&value)
        }
    }
}

fn endpoint(target: &TargetArgs) -> Endpoint<'_> {
    info!(
        service = %target.service,
        module = %target.module,
        function = %target.function,
        path = %target.path,
        "issuing request"
    );
    Endpoint::new(&target.service, &target.module, &target.function)
}

fn query_pairs(target: &TargetArgs) -> Vec<(&str, &str)> {
    target
        .query
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

fn request_options(target: &TargetArgs) -> RequestOptions {
    let mut options = RequestOptions::new();
    for (name, value) in &target.headers {
        options = options.with_header(name.clone(), value.clone());
    }
    if let Some(request_id) = &target.request_id {
        options = options.with_request_id(request_id.clone());
    }
    if let Some(access_token) = &target.access_token {
        options = options.with_access_token(access_token.clone());
    }
    if let Some(secs) = target.timeout_secs {
        options = options.with_timeout(Duration::from_secs(secs));
    }
    options
}

fn parse_body(args: &BodyArgs) -> Result<Value> {
    serde_json::from_str(&args.body).context("--body must be valid JSON")
}

fn render(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("render response")
}
