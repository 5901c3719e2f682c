/*
[INPUT]:  Client id and base64 client secret issued by GS2
[OUTPUT]: Immutable credential pair passed to the client
[POS]:    Auth layer - caller-held credentials
[UPDATE]: When credential sources or fields change
*/

use std::fmt;

use serde::Deserialize;

/// Client id / secret pair used to sign every request
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from a client id and a base64-encoded secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Base64-encoded secret, exactly as issued
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
