/*
[INPUT]:  Base64 client secret, module/function identifiers, unix timestamp
[OUTPUT]: Base64-encoded HMAC-SHA256 request signatures
[POS]:    Auth layer - request signing shared by every call path
[UPDATE]: When changing signing algorithm or message format
*/

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::http::{Gs2Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed with the decoded client secret
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl RequestSigner {
    /// Create a signer from a base64-encoded secret
    ///
    /// The secret is decoded once here; an invalid encoding is rejected
    /// instead of signing with a mangled key.
    pub fn new(client_secret: &str) -> Result<Self> {
        let key = BASE64
            .decode(client_secret.trim())
            .map_err(Gs2Error::InvalidSecret)?;
        let mac = HmacSha256::new_from_slice(&key)
            .map_err(|err| Gs2Error::Config(format!("signing key rejected: {err}")))?;
        Ok(Self { mac })
    }

    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        Self::new(credentials.client_secret())
    }

    /// Sign a request
    ///
    /// Format: "{module}:{function}:{timestamp}"
    /// Returns base64-encoded HMAC-SHA256
    pub fn sign(&self, module: &str, function: &str, timestamp: i64) -> String {
        let message = format!("{module}:{function}:{timestamp}");
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}
