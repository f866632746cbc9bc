//! Client core for the blog front-end.
//!
//! # Overview
//! Two pieces live here: the static client-side route table ([`router`]) and
//! the API client wrapper for the blog's REST backend. The wrapper builds
//! `HttpRequest` values and parses `HttpResponse` values as plain data
//! (host-does-IO); a [`Transport`] performs the actual round-trip.
//!
//! # Design
//! - `BlogClient` is stateless; it holds only the read-only `ClientConfig`.
//! - Every call passes through the [`interceptor`], which logs it, unwraps the
//!   body of a successful response and collapses every failure into a single
//!   `ApiError` carrying a display-ready message.
//! - `BlogApi` ties builder, transport and interceptor together and exposes
//!   one method per backend operation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod router;
pub mod transport;
pub mod types;

pub use api::{ArticleApi, BlogApi, TagApi};
pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::{ApiError, Failure};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::{resolve, RouteEntry, RouteError, RouteMatch, View, ROUTES};
pub use transport::{Transport, UreqTransport};
pub use types::{Article, ArticleInput, ArticleStatus, Tag, TagInput, TagRef};
