/*
[INPUT]:  Service/module/function identifiers and caller transport options
[OUTPUT]: Endpoint descriptors and mergeable request options
[POS]:    Data layer - request parameters for every call path
[UPDATE]: When request parameters or merge rules change
*/

use std::time::Duration;

use crate::http::DEFAULT_REQUEST_TIMEOUT;

/// Target operation of a call
///
/// `service` picks the host, `module` and `function` go into the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint<'a> {
    pub service: &'a str,
    pub module: &'a str,
    pub function: &'a str,
}

impl<'a> Endpoint<'a> {
    pub const fn new(service: &'a str, module: &'a str, function: &'a str) -> Self {
        Self {
            service,
            module,
            function,
        }
    }
}

/// Extra transport options for a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overall request timeout
    pub timeout: Option<Duration>,
    /// Additional headers; signing headers always take precedence
    pub headers: Vec<(String, String)>,
    /// Sent as `X-GS2-REQUEST-ID`
    pub request_id: Option<String>,
    /// Sent as `X-GS2-ACCESS-TOKEN`
    pub access_token: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Timeout to apply, falling back to the 60s default when unset
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Combine two option sets, keeping `self` wherever both set a value
    ///
    /// Headers are compared by name, case-insensitively.
    pub fn merged_with(&self, fallback: &RequestOptions) -> RequestOptions {
        let mut headers: Vec<(String, String)> = fallback
            .headers
            .iter()
            .filter(|(name, _)| {
                !self
                    .headers
                    .iter()
                    .any(|(own, _)| own.eq_ignore_ascii_case(name))
            })
            .cloned()
            .collect();
        headers.extend(self.headers.iter().cloned());

        RequestOptions {
            timeout: self.timeout.or(fallback.timeout),
            headers,
            request_id: self
                .request_id
                .clone()
                .or_else(|| fallback.request_id.clone()),
            access_token: self
                .access_token
                .clone()
                .or_else(|| fallback.access_token.clone()),
        }
    }
}
