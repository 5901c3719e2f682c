/*
[INPUT]:  Client id and base64 client secret
[OUTPUT]: Credentials and HMAC request signatures
[POS]:    Auth layer - handles GS2 request authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::RequestSigner;
