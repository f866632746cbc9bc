//! Request and response interception.
//!
//! Every call goes through [`on_request`] before it is handed to the transport
//! and through [`intercept_response`] afterwards. The request side only logs.
//! The response side logs, keeps the body of a 2xx response and decodes it,
//! and turns anything else into an [`ApiError`].

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Failure};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Log an outgoing request. The request is not modified.
pub fn on_request(req: &HttpRequest) {
    log::info!("sending request: {} {}", req.method, req.display_url());
}

/// Unwrap the outcome of a round-trip into the decoded response body.
///
/// An empty body decodes as JSON `null`, so `()` and `Option<T>` work for
/// endpoints that answer without content.
pub fn intercept_response<T: DeserializeOwned>(
    req: &HttpRequest,
    outcome: Result<HttpResponse, Failure>,
) -> Result<T, ApiError> {
    let response = match outcome {
        Ok(response) => response,
        Err(failure) => {
            let detail = format!("{failure:?}");
            return Err(reject(req.method, &req.display_url(), failure, &detail));
        }
    };

    if !response.is_success() {
        let failure = Failure::Status(response.status);
        return Err(reject(req.method, &req.display_url(), failure, &response.body));
    }

    log::info!("received response: {} {}", response.status, req.display_url());
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body)
        .map_err(|e| reject(req.method, &req.display_url(), Failure::InvalidBody, &e))
}

/// Log a failure with its detail and reduce it to the normalized error.
pub fn reject(method: HttpMethod, url: &str, failure: Failure, detail: &dyn Display) -> ApiError {
    let err = ApiError::from(failure);
    match failure {
        Failure::Status(status) => {
            log::error!("response error: {status} {method} {url}: {detail} ({err})");
        }
        _ => log::error!("request error: {method} {url}: {detail} ({err})"),
    }
    err
}
