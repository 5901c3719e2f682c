/*
[INPUT]:  Credentials, region, host template and default transport options
[OUTPUT]: Configured reqwest client ready for signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Url};

use crate::auth::{Credentials, RequestSigner};
use crate::http::{Gs2Error, Result};
use crate::types::RequestOptions;

/// Host template for GS2 services
pub const ENDPOINT_HOST: &str = "https://{service}.{region}.gs2io.com";
/// Host template used by older deployments
pub const LEGACY_ENDPOINT_HOST: &str = "https://{service}.{region}.gs2.io";

pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// Timeout applied when no option sets one
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub region: String,
    /// May contain `{service}` and `{region}` placeholders
    pub endpoint_host: String,
    pub connect_timeout: Duration,
    /// Applied to every call; these win over per-call options
    pub default_options: RequestOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_host: ENDPOINT_HOST.to_string(),
            connect_timeout: Duration::from_secs(10),
            default_options: RequestOptions::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint_host(mut self, endpoint_host: impl Into<String>) -> Self {
        self.endpoint_host = endpoint_host.into();
        self
    }

    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = options;
        self
    }
}

/// Main HTTP client for GS2 APIs
#[derive(Debug, Clone)]
pub struct Gs2Client {
    http_client: Client,
    config: ClientConfig,
    credentials: Credentials,
    signer: RequestSigner,
}

impl Gs2Client {
    /// Create a new client for a region with default configuration
    pub fn new(credentials: Credentials, region: impl Into<String>) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::new(region))
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let signer = RequestSigner::from_credentials(&credentials)?;

        // Catch malformed templates up front rather than on the first call
        Url::parse(&expand_host(&config.endpoint_host, "service", &config.region))?;

        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| Gs2Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            config,
            credentials,
            signer,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn region(&self) -> &str {
        &self.config.region
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }

    pub(crate) fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build the full URL for a service path
    pub fn endpoint_url(&self, service: &str, path: &str) -> Result<Url> {
        let host = expand_host(&self.config.endpoint_host, service, &self.config.region);
        Ok(Url::parse(&format!("{host}{path}"))?)
    }
}

fn expand_host(template: &str, service: &str, region: &str) -> String {
    template
        .replace("{region}", region)
        .replace("{service}", service)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "Z3MyLXRlc3Qtc2VjcmV0LWtleQ==";

    fn credentials() -> Credentials {
        Credentials::new("client-id", SECRET)
    }

    #[test]
    fn test_endpoint_url_substitutes_template() {
        let client = Gs2Client::new(credentials(), "ap-northeast-1").unwrap();
        let url = client.endpoint_url("account", "/namespace").unwrap();
        assert_eq!(
            url.as_str(),
            "https://account.ap-northeast-1.gs2io.com/namespace"
        );
    }

    #[test]
    fn test_legacy_host() {
        let config = ClientConfig::new("us-east-1").with_endpoint_host(LEGACY_ENDPOINT_HOST);
        let client = Gs2Client::with_config(credentials(), config).unwrap();
        let url = client.endpoint_url("inbox", "/message").unwrap();
        assert_eq!(url.as_str(), "https://inbox.us-east-1.gs2.io/message");
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.endpoint_host, ENDPOINT_HOST);
        assert_eq!(config.default_options, RequestOptions::default());
    }

    #[test]
    fn test_invalid_secret_fails_construction() {
        let err = Gs2Client::new(Credentials::new("client-id", "%%%"), "ap-northeast-1")
            .unwrap_err();
        assert!(matches!(err, Gs2Error::InvalidSecret(_)));
    }

    #[test]
    fn test_invalid_template_fails_construction() {
        let config = ClientConfig::new("ap-northeast-1").with_endpoint_host("{service}.example");
        let err = Gs2Client::with_config(credentials(), config).unwrap_err();
        assert!(matches!(err, Gs2Error::UrlParse(_)));
    }
}
