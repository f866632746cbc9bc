//! Error normalization for the blog API client.
//!
//! # Design
//! Every way a call can fail is first described as a `Failure`, then collapsed
//! into an `ApiError` that only carries a display-ready message. The mapping
//! from `Failure` to message is a pure function with no knowledge of the HTTP
//! library in use. The status code and underlying cause are logged by the
//! interceptor and are intentionally not part of `ApiError`.

use std::borrow::Cow;

pub const MSG_NOT_FOUND: &str = "resource not found";
pub const MSG_UNAUTHORIZED: &str = "unauthorized access";
pub const MSG_FORBIDDEN: &str = "access denied";
pub const MSG_SERVER_ERROR: &str = "internal server error";
pub const MSG_NETWORK: &str = "network connection failed, please check network";
pub const MSG_REQUEST_FAILED: &str = "request failed";

/// Classification of a failed call, before it is reduced to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The server responded with a non-2xx status.
    Status(u16),
    /// The request went out but no response came back (timeout, refused
    /// connection, reset, DNS failure).
    NoResponse,
    /// The request could not be built or handed to the network.
    NotSent,
    /// A 2xx response whose body does not decode into the expected type.
    InvalidBody,
}

impl Failure {
    /// The user-facing message for this failure.
    pub fn message(self) -> Cow<'static, str> {
        match self {
            Failure::Status(404) => Cow::Borrowed(MSG_NOT_FOUND),
            Failure::Status(401) => Cow::Borrowed(MSG_UNAUTHORIZED),
            Failure::Status(403) => Cow::Borrowed(MSG_FORBIDDEN),
            Failure::Status(500) => Cow::Borrowed(MSG_SERVER_ERROR),
            Failure::Status(status) => Cow::Owned(format!("{MSG_REQUEST_FAILED}: {status}")),
            Failure::NoResponse => Cow::Borrowed(MSG_NETWORK),
            Failure::NotSent | Failure::InvalidBody => Cow::Borrowed(MSG_REQUEST_FAILED),
        }
    }
}

/// The single error kind surfaced to callers of the blog API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        Self {
            message: failure.message().into_owned(),
        }
    }
}
