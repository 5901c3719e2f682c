/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed credentials and client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::Context;
use gs2_client::{ClientConfig, Credentials, ENDPOINT_HOST, RequestOptions};
use serde::Deserialize;

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// `client_id` and `client_secret` (base64)
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Region substituted into the host template
    #[serde(default = "default_region")]
    pub region: String,
    /// Host template; may contain `{service}` and `{region}`
    #[serde(default)]
    pub endpoint_host: Option<String>,
    /// Request timeout applied to every call
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_region() -> String {
    gs2_client::http::DEFAULT_REGION.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Client configuration derived from this file
    pub fn client_config(&self) -> ClientConfig {
        let mut defaults = RequestOptions::new();
        if let Some(secs) = self.timeout_secs {
            defaults = defaults.with_timeout(Duration::from_secs(secs));
        }

        ClientConfig::new(self.region.clone())
            .with_endpoint_host(
                self.endpoint_host
                    .clone()
                    .unwrap_or_else(|| ENDPOINT_HOST.to_string()),
            )
            .with_default_options(defaults)
    }
}
