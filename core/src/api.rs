//! Resource-level API: one call per backend operation.
//!
//! `BlogApi` pairs a `BlogClient` with a `Transport` and runs every call
//! through the interceptors, so each operation returns either the decoded
//! response body or a normalized `ApiError`.

use serde::de::DeserializeOwned;

use crate::client::BlogClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::interceptor;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Article, ArticleInput, Tag, TagInput};

/// Entry point for talking to the blog backend.
#[derive(Clone)]
pub struct BlogApi<T = UreqTransport> {
    client: BlogClient,
    transport: T,
}

impl BlogApi<UreqTransport> {
    /// Build an API handle that talks to the network with `ureq`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config, transport)
    }
}

impl Default for BlogApi<UreqTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> BlogApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: BlogClient::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    pub fn articles(&self) -> ArticleApi<'_, T> {
        ArticleApi { api: self }
    }

    pub fn tags(&self) -> TagApi<'_, T> {
        TagApi { api: self }
    }

    fn send<R: DeserializeOwned>(&self, req: HttpRequest) -> Result<R, ApiError> {
        interceptor::on_request(&req);
        let outcome = self.transport.execute(&req);
        interceptor::intercept_response(&req, outcome)
    }
}

/// Article operations, borrowed from a [`BlogApi`].
pub struct ArticleApi<'a, T> {
    api: &'a BlogApi<T>,
}

impl<T: Transport> ArticleApi<'_, T> {
    pub fn list(&self) -> Result<Vec<Article>, ApiError> {
        self.api.send(self.api.client.build_list_articles())
    }

    /// The article with `id`. A backend that answers a missing id with
    /// `200 null` (or an empty body) yields `None`; one that answers `404`
    /// yields the "resource not found" error.
    pub fn get(&self, id: i64) -> Result<Option<Article>, ApiError> {
        self.api.send(self.api.client.build_get_article(id))
    }

    pub fn create(&self, input: &ArticleInput) -> Result<Article, ApiError> {
        self.api.send(self.api.client.build_create_article(input)?)
    }

    pub fn update(&self, id: i64, input: &ArticleInput) -> Result<Article, ApiError> {
        self.api.send(self.api.client.build_update_article(id, input)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.send(self.api.client.build_delete_article(id))
    }

    /// Articles matching `keyword`, as filtered by the backend.
    pub fn search(&self, keyword: &str) -> Result<Vec<Article>, ApiError> {
        self.api.send(self.api.client.build_search_articles(keyword))
    }

    pub fn by_category(&self, category: &str) -> Result<Vec<Article>, ApiError> {
        self.api
            .send(self.api.client.build_articles_by_category(category))
    }
}

/// Tag operations, borrowed from a [`BlogApi`].
pub struct TagApi<'a, T> {
    api: &'a BlogApi<T>,
}

impl<T: Transport> TagApi<'_, T> {
    pub fn list(&self) -> Result<Vec<Tag>, ApiError> {
        self.api.send(self.api.client.build_list_tags())
    }

    /// The tag with `id`, or `None` when the backend answers `200 null`.
    pub fn get(&self, id: i64) -> Result<Option<Tag>, ApiError> {
        self.api.send(self.api.client.build_get_tag(id))
    }

    pub fn create(&self, input: &TagInput) -> Result<Tag, ApiError> {
        self.api.send(self.api.client.build_create_tag(input)?)
    }

    pub fn update(&self, id: i64, input: &TagInput) -> Result<Tag, ApiError> {
        self.api.send(self.api.client.build_update_tag(id, input)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.send(self.api.client.build_delete_tag(id))
    }
}
