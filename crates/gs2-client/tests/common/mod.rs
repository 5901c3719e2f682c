/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gs2-client tests

use gs2_client::{ClientConfig, Credentials, Gs2Client};
use wiremock::MockServer;

/// base64("gs2-test-secret-key")
pub const TEST_SECRET: &str = "Z3MyLXRlc3Qtc2VjcmV0LWtleQ==";
pub const TEST_CLIENT_ID: &str = "YourClientId";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_CLIENT_ID, TEST_SECRET)
}

/// Client whose host template points at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Gs2Client {
    client_with_config(ClientConfig::new("ap-northeast-1").with_endpoint_host(server.uri()))
}

#[allow(dead_code)]
pub fn client_with_config(config: ClientConfig) -> Gs2Client {
    Gs2Client::with_config(test_credentials(), config).expect("client init")
}

/// Error envelope the way the server wraps its error list
#[allow(dead_code)]
pub fn error_envelope(errors: &serde_json::Value) -> String {
    serde_json::json!({ "message": errors.to_string() }).to_string()
}
