/*
[INPUT]:  Request signer, client id, endpoint, timestamp and caller options
[OUTPUT]: Header map carrying X-GS2-* authentication headers
[POS]:    HTTP layer - request signing for every call
[UPDATE]: When changing signing headers or header precedence
*/

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::RequestSigner;
use crate::http::{Gs2Error, Result};
use crate::types::{Endpoint, RequestOptions};

pub const CLIENT_ID_HEADER: &str = "X-GS2-CLIENT-ID";
pub const REQUEST_TIMESTAMP_HEADER: &str = "X-GS2-REQUEST-TIMESTAMP";
pub const REQUEST_SIGN_HEADER: &str = "X-GS2-REQUEST-SIGN";
pub const REQUEST_ID_HEADER: &str = "X-GS2-REQUEST-ID";
pub const ACCESS_TOKEN_HEADER: &str = "X-GS2-ACCESS-TOKEN";

/// Build request headers: caller headers first, then the signing headers
pub(crate) fn signed_headers(
    signer: &RequestSigner,
    client_id: &str,
    endpoint: Endpoint<'_>,
    timestamp: i64,
    options: &RequestOptions,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &options.headers {
        headers.insert(header_name(name)?, header_value(name, value)?);
    }

    if let Some(request_id) = &options.request_id {
        headers.insert(
            header_name(REQUEST_ID_HEADER)?,
            header_value(REQUEST_ID_HEADER, request_id)?,
        );
    }
    if let Some(access_token) = &options.access_token {
        headers.insert(
            header_name(ACCESS_TOKEN_HEADER)?,
            header_value(ACCESS_TOKEN_HEADER, access_token)?,
        );
    }

    let sign = signer.sign(endpoint.module, endpoint.function, timestamp);
    headers.insert(
        header_name(CLIENT_ID_HEADER)?,
        header_value(CLIENT_ID_HEADER, client_id)?,
    );
    headers.insert(
        header_name(REQUEST_TIMESTAMP_HEADER)?,
        HeaderValue::from(timestamp),
    );
    headers.insert(
        header_name(REQUEST_SIGN_HEADER)?,
        header_value(REQUEST_SIGN_HEADER, &sign)?,
    );

    Ok(headers)
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|err| Gs2Error::InvalidHeader(format!("{name}: {err}")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| Gs2Error::InvalidHeader(format!("{name}: {err}")))
}
