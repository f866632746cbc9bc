//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `BlogClient` builds `HttpRequest` values and the interceptor parses
//! `HttpResponse` values without touching the network; a `Transport` performs
//! the round-trip in between. Keeping the query string as separate pairs lets
//! the transport do the percent-encoding and lets tests assert on the exact
//! parameters that were sent.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `BlogClient::build_*` methods. `url` is absolute and carries no
/// query string; query parameters live in `query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The URL with its query string appended, for display in logs.
    ///
    /// Values are not percent-encoded; the transport handles that on the wire.
    pub fn display_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then handed
/// to the response interceptor, which keeps only the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Vec<(&str, &str)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:8080/api/articles".to_string(),
            query: query
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn display_url_without_query() {
        assert_eq!(
            request(vec![]).display_url(),
            "http://localhost:8080/api/articles"
        );
    }

    #[test]
    fn display_url_appends_query_pairs() {
        let req = request(vec![("search", "vue"), ("category", "tech")]);
        assert_eq!(
            req.display_url(),
            "http://localhost:8080/api/articles?search=vue&category=tech"
        );
        assert_eq!(req.query_param("category"), Some("tech"));
        assert_eq!(req.query_param("missing"), None);
    }

    #[test]
    fn success_covers_whole_2xx_range() {
        for (status, expected) in [
            (200, true),
            (201, true),
            (204, true),
            (299, true),
            (199, false),
            (304, false),
            (404, false),
        ] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: String::new(),
            };
            assert_eq!(response.is_success(), expected, "status {status}");
        }
    }

    #[test]
    fn method_displays_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
