//! Verify request building and response interception against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Each request vector names an operation, its inputs, and the request it must
//! produce. Each response vector describes a simulated response and either the
//! decoded body or the normalized error message the caller should see.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use blog_client::{
    interceptor, Article, ArticleInput, BlogClient, ClientConfig, HttpMethod, HttpRequest,
    HttpResponse, Tag, TagInput,
};
use serde::de::DeserializeOwned;

const BASE_URL: &str = "http://localhost:8080/api";

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn build(client: &BlogClient, case: &serde_json::Value) -> HttpRequest {
    let id = || case["id"].as_i64().unwrap();
    let article = || -> ArticleInput { serde_json::from_value(case["input"].clone()).unwrap() };
    let tag = || -> TagInput { serde_json::from_value(case["input"].clone()).unwrap() };

    match case["operation"].as_str().unwrap() {
        "list_articles" => client.build_list_articles(),
        "get_article" => client.build_get_article(id()),
        "create_article" => client.build_create_article(&article()).unwrap(),
        "update_article" => client.build_update_article(id(), &article()).unwrap(),
        "delete_article" => client.build_delete_article(id()),
        "search_articles" => client.build_search_articles(case["keyword"].as_str().unwrap()),
        "articles_by_category" => {
            client.build_articles_by_category(case["category"].as_str().unwrap())
        }
        "list_tags" => client.build_list_tags(),
        "get_tag" => client.build_get_tag(id()),
        "create_tag" => client.build_create_tag(&tag()).unwrap(),
        "update_tag" => client.build_update_tag(id(), &tag()).unwrap(),
        "delete_tag" => client.build_delete_tag(id()),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = BlogClient::new(ClientConfig::default());
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];
        let req = build(&client, case);

        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
            "{name}: url"
        );

        let expected_query: Vec<(String, String)> =
            serde_json::from_value(expected["query"].clone()).unwrap();
        assert_eq!(req.query, expected_query, "{name}: query");

        match req.body.as_deref() {
            Some(body) => {
                let body: serde_json::Value = serde_json::from_str(body).unwrap();
                assert_eq!(body, expected["body"], "{name}: body");
                assert_eq!(
                    req.headers,
                    vec![("content-type".to_string(), "application/json".to_string())],
                    "{name}: headers"
                );
            }
            None => {
                assert!(expected["body"].is_null(), "{name}: request should have no body");
                assert!(req.headers.is_empty(), "{name}: headers");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn check<T>(name: &str, req: &HttpRequest, response: HttpResponse, case: &serde_json::Value)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let result = interceptor::intercept_response::<T>(req, Ok(response));
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert_eq!(err.message(), expected_error.as_str().unwrap(), "{name}: message");
    } else {
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: decoded body");
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let req = BlogClient::default().build_list_articles();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        match case["kind"].as_str().unwrap() {
            "articles" => check::<Vec<Article>>(name, &req, response, case),
            "article" => check::<Article>(name, &req, response, case),
            "optional_article" => check::<Option<Article>>(name, &req, response, case),
            "tag" => check::<Tag>(name, &req, response, case),
            "empty" => check::<()>(name, &req, response, case),
            other => panic!("{name}: unknown kind: {other}"),
        }
    }
}
