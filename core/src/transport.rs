//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! The `Transport` trait is the only place where I/O happens. A transport
//! reports every status as data; it only fails when there is no response to
//! report, and then it has to say whether the request was never sent or was
//! sent without a reply. That distinction is all the interceptor needs to
//! pick a message. Once a status line has been read, an unreadable body never
//! hides the status: error responses keep it with an empty body, and only a
//! 2xx response fails, as `InvalidBody`.

use crate::config::ClientConfig;
use crate::error::Failure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
pub trait Transport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, Failure>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, Failure> {
        (**self).execute(req)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// The configured timeout bounds each call as a whole. Non-2xx statuses are
/// returned as responses rather than errors.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, Failure> {
        let result = match req.method {
            HttpMethod::Get => self.send_without_body(self.agent.get(&req.url), req),
            HttpMethod::Delete => self.send_without_body(self.agent.delete(&req.url), req),
            HttpMethod::Post => self.send_with_body(self.agent.post(&req.url), req),
            HttpMethod::Put => self.send_with_body(self.agent.put(&req.url), req),
        };

        let mut response = result.map_err(|e| {
            log::debug!("transport error for {} {}: {e}", req.method, req.url);
            classify(&e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // The status line has arrived, so the status decides the outcome even
        // when the body cannot be read.
        let body = match response.body_mut().read_to_vec() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                log::debug!("failed reading body of {status} {} {}: {e}", req.method, req.url);
                if (200..300).contains(&status) {
                    return Err(Failure::InvalidBody);
                }
                String::new()
            }
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl UreqTransport {
    fn send_without_body(
        &self,
        builder: ureq::RequestBuilder<ureq::typestate::WithoutBody>,
        req: &HttpRequest,
    ) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        let mut builder = builder;
        for (name, value) in &req.query {
            builder = builder.query(name, value);
        }
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        builder.call()
    }

    fn send_with_body(
        &self,
        builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
        req: &HttpRequest,
    ) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        let mut builder = builder;
        for (name, value) in &req.query {
            builder = builder.query(name, value);
        }
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        match &req.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        }
    }
}

/// Errors raised before anything reached the wire count as "not sent";
/// everything else means the request went out and no usable reply came back.
fn classify(err: &ureq::Error) -> Failure {
    match err {
        ureq::Error::BadUri(_)
        | ureq::Error::Http(_)
        | ureq::Error::InvalidProxyUrl
        | ureq::Error::RequireHttpsOnly(_) => Failure::NotSent,
        _ => Failure::NoResponse,
    }
}
