/*
[INPUT]:  Client configuration, credentials and call parameters
[OUTPUT]: HTTP responses decoded to JSON or classified errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding request methods or changing client behavior
*/

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod signature;

pub use error::{ErrorPayload, Gs2Error, Result};
pub use response::classify;

pub use client::{
    ClientConfig, DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT, ENDPOINT_HOST, Gs2Client,
    LEGACY_ENDPOINT_HOST,
};
