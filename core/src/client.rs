//! Stateless HTTP request builder for the blog API.
//!
//! # Design
//! `BlogClient` holds only its `ClientConfig` and carries no mutable state
//! between calls. Each resource operation has a `build_*` method that produces
//! an `HttpRequest`; the response side is handled generically by
//! [`crate::interceptor::intercept_response`]. The caller (or [`crate::api`])
//! executes the actual HTTP round-trip in between, keeping this module
//! deterministic and free of I/O.

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Failure};
use crate::http::{HttpMethod, HttpRequest};
use crate::interceptor;
use crate::types::{ArticleInput, TagInput};

const ARTICLES: &str = "/articles";
const TAGS: &str = "/tags";

/// Synchronous, stateless request builder for the blog API.
#[derive(Debug, Clone, Default)]
pub struct BlogClient {
    config: ClientConfig,
}

impl BlogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // Articles

    pub fn build_list_articles(&self) -> HttpRequest {
        self.request(HttpMethod::Get, ARTICLES.to_string())
    }

    pub fn build_get_article(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{ARTICLES}/{id}"))
    }

    pub fn build_create_article(&self, input: &ArticleInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, ARTICLES.to_string(), input)
    }

    pub fn build_update_article(
        &self,
        id: i64,
        input: &ArticleInput,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("{ARTICLES}/{id}"), input)
    }

    pub fn build_delete_article(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("{ARTICLES}/{id}"))
    }

    pub fn build_search_articles(&self, keyword: &str) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, ARTICLES.to_string());
        req.query.push(("search".to_string(), keyword.to_string()));
        req
    }

    pub fn build_articles_by_category(&self, category: &str) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, ARTICLES.to_string());
        req.query.push(("category".to_string(), category.to_string()));
        req
    }

    // Tags

    pub fn build_list_tags(&self) -> HttpRequest {
        self.request(HttpMethod::Get, TAGS.to_string())
    }

    pub fn build_get_tag(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{TAGS}/{id}"))
    }

    pub fn build_create_tag(&self, input: &TagInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, TAGS.to_string(), input)
    }

    pub fn build_update_tag(&self, id: i64, input: &TagInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("{TAGS}/{id}"), input)
    }

    pub fn build_delete_tag(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("{TAGS}/{id}"))
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = match serde_json::to_string(input) {
            Ok(body) => body,
            Err(e) => {
                let url = format!("{}{path}", self.config.base_url());
                return Err(interceptor::reject(method, &url, Failure::NotSent, &e));
            }
        };
        let mut req = self.request(method, path);
        req.headers.push((
            "content-type".to_string(),
            self.config.content_type().to_string(),
        ));
        req.body = Some(body);
        Ok(req)
    }
}
