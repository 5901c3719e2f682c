/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public GS2 client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ErrorPayload,
    Gs2Client,
    Gs2Error,
    Result,
    ENDPOINT_HOST,
    LEGACY_ENDPOINT_HOST,
};

pub use types::*;
