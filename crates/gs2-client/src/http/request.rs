/*
[INPUT]:  Endpoint, path, query pairs, optional JSON body and options
[OUTPUT]: Decoded JSON responses or classified errors
[POS]:    HTTP layer - signed GET/POST/PUT/DELETE dispatch
[UPDATE]: When changing request assembly or transport error handling
*/

use std::error::Error;

use chrono::Utc;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::response::classify;
use crate::http::signature::signed_headers;
use crate::http::{ErrorPayload, Gs2Client, Gs2Error, Result};
use crate::types::{Endpoint, RequestOptions};

impl Gs2Client {
    /// Issue a signed GET request
    pub async fn get(
        &self,
        endpoint: Endpoint<'_>,
        path: &str,
        query: &[(&str, &str)],
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.dispatch(Method::GET, endpoint, path, query, None, options)
            .await
    }

    /// Issue a signed POST request
    ///
    /// Fails with `MissingBody` before touching the network when `body` is `None`.
    pub async fn post(
        &self,
        endpoint: Endpoint<'_>,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, &str)],
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let body = body.ok_or(Gs2Error::MissingBody)?;
        self.dispatch(Method::POST, endpoint, path, query, Some(body), options)
            .await
    }

    /// Issue a signed PUT request
    ///
    /// Fails with `MissingBody` before touching the network when `body` is `None`.
    pub async fn put(
        &self,
        endpoint: Endpoint<'_>,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, &str)],
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let body = body.ok_or(Gs2Error::MissingBody)?;
        self.dispatch(Method::PUT, endpoint, path, query, Some(body), options)
            .await
    }

    /// Issue a signed DELETE request
    pub async fn delete(
        &self,
        endpoint: Endpoint<'_>,
        path: &str,
        query: &[(&str, &str)],
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.dispatch(Method::DELETE, endpoint, path, query, None, options)
            .await
    }

    async fn dispatch(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let url = self.endpoint_url(endpoint.service, path)?;

        let defaults = &self.config().default_options;
        let options = match options {
            Some(extra) => defaults.merged_with(extra),
            None => defaults.clone(),
        };

        let timestamp = Utc::now().timestamp();
        let headers = signed_headers(
            self.signer(),
            self.credentials().client_id(),
            endpoint,
            timestamp,
            &options,
        )?;

        let mut builder = self
            .http_client()
            .request(method.clone(), url.clone())
            .timeout(options.effective_timeout())
            .headers(headers);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(
            %method,
            %url,
            module = endpoint.module,
            function = endpoint.function,
            "dispatching request"
        );

        let response = builder
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(&url, err))?;

        debug!(%url, status = status.as_u16(), "response received");
        classify(status, &body)
    }
}

fn transport_error(url: &reqwest::Url, err: reqwest::Error) -> Gs2Error {
    let message = error_chain(&err);
    warn!(%url, error = %message, "request failed without a response");
    Gs2Error::InternalServerError(ErrorPayload::message(message))
}

/// Render an error followed by each of its causes, separated by ": "
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
