//! Client-side route table.
//!
//! # Design
//! The table is a `static` array of five entries and never changes at runtime.
//! Patterns are written with `:name` placeholders (`/blog/:id`); resolving a
//! path walks the entries in order and returns the first match together with
//! the bound parameters. Unmatched paths resolve to `None`: there is no
//! catch-all entry.
//!
//! Matching ignores the query string and fragment, tolerates a single
//! trailing slash and compares static segments case-insensitively. Parameter
//! values are returned verbatim.

use std::collections::BTreeMap;

/// The logical view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    BlogList,
    BlogDetail,
    CreatePost,
    About,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub static ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    RouteEntry {
        path: "/blog",
        name: "BlogList",
        view: View::BlogList,
    },
    RouteEntry {
        path: "/blog/:id",
        name: "BlogDetail",
        view: View::BlogDetail,
    },
    RouteEntry {
        path: "/create",
        name: "CreatePost",
        view: View::CreatePost,
    },
    RouteEntry {
        path: "/about",
        name: "About",
        view: View::About,
    },
];

/// A resolved route: the entry that matched and its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn view(&self) -> View {
        self.entry.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route named `{0}`")]
    UnknownRoute(String),
    #[error("route `{route}` needs a value for `:{param}`")]
    MissingParam { route: &'static str, param: String },
}

/// Resolve a location (path, optionally with query and fragment) to a route.
pub fn resolve(location: &str) -> Option<RouteMatch> {
    let path = strip_location(location);
    let segments = split(path);
    ROUTES.iter().find_map(|entry| {
        entry.match_segments(&segments).map(|params| RouteMatch { entry, params })
    })
}

/// Look up a route by its logical name.
pub fn find_by_name(name: &str) -> Result<&'static RouteEntry, RouteError> {
    ROUTES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))
}

impl RouteEntry {
    /// Build a concrete path for this route, filling every `:name` segment.
    pub fn path_for(&self, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let mut out = String::new();
        for segment in split(self.path) {
            let value = match segment.strip_prefix(':') {
                Some(param) => params
                    .iter()
                    .find(|(key, value)| *key == param && !value.is_empty())
                    .map(|(_, value)| *value)
                    .ok_or_else(|| RouteError::MissingParam {
                        route: self.name,
                        param: param.to_string(),
                    })?,
                None => segment,
            };
            out.push('/');
            out.push_str(value);
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }

    fn match_segments(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        let pattern = split(self.path);
        if pattern.len() != segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.to_string(), actual.to_string());
                }
                None if expected.eq_ignore_ascii_case(actual) => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn strip_location(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// Split a path into its segments; `/` has none.
fn split(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_five_routes_in_order() {
        let names: Vec<_> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Home", "BlogList", "BlogDetail", "CreatePost", "About"]
        );
    }

    #[test]
    fn static_routes_resolve() {
        let cases = [
            ("/", View::Home),
            ("/blog", View::BlogList),
            ("/create", View::CreatePost),
            ("/about", View::About),
        ];
        for (path, view) in cases {
            let matched = resolve(path).unwrap();
            assert_eq!(matched.view(), view, "{path}");
            assert!(matched.params.is_empty(), "{path}");
        }
    }

    #[test]
    fn detail_route_binds_id() {
        let matched = resolve("/blog/42").unwrap();
        assert_eq!(matched.view(), View::BlogDetail);
        assert_eq!(matched.entry.name, "BlogDetail");
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        let matched = resolve("/blog/abc/?from=home#comments").unwrap();
        assert_eq!(matched.view(), View::BlogDetail);
        assert_eq!(matched.param("id"), Some("abc"));

        assert_eq!(resolve("/about/").unwrap().view(), View::About);
        assert_eq!(resolve("/?q=1").unwrap().view(), View::Home);
        assert_eq!(resolve("/blog/").unwrap().view(), View::BlogList);
    }

    #[test]
    fn static_segments_are_case_insensitive() {
        let matched = resolve("/Blog/MixedCase").unwrap();
        assert_eq!(matched.view(), View::BlogDetail);
        assert_eq!(matched.param("id"), Some("MixedCase"));
    }

    #[test]
    fn unmatched_paths_resolve_to_none() {
        assert!(resolve("/missing").is_none());
        assert!(resolve("/blog/1/edit").is_none());
        assert!(resolve("/blog//").is_none());
    }

    #[test]
    fn reverse_lookup_fills_params() {
        let entry = find_by_name("BlogDetail").unwrap();
        assert_eq!(entry.path_for(&[("id", "7")]).unwrap(), "/blog/7");
        assert_eq!(find_by_name("Home").unwrap().path_for(&[]).unwrap(), "/");
        assert_eq!(find_by_name("About").unwrap().path_for(&[]).unwrap(), "/about");
    }

    #[test]
    fn reverse_lookup_errors() {
        let err = find_by_name("BlogDetail").unwrap().path_for(&[]).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParam {
                route: "BlogDetail",
                param: "id".to_string()
            }
        );
        assert_eq!(
            find_by_name("Nope").unwrap_err().to_string(),
            "no route named `Nope`"
        );
    }
}
