//! File path to route path conversion.
//!
//! A page file's location decides its route:
//!
//! | file                        | route         |
//! |-----------------------------|---------------|
//! | `index.swift`               | `""`          |
//! | `api/hello/hello.index.swift` | `api/hello` |
//! | `user/[id].swift`           | `user/:id`    |
//! | `post/[...slug].swift`      | `post/**`     |
//!
//! Any component ending in `index` is dropped, not only `index` itself.

use std::fmt;

use routegen_core::{Error, Result};

/// Marker that turns a bracketed component into a catch-all.
const CATCH_ALL_MARKER: &str = "...";

/// Components ending with this text are elided from the route.
const INDEX_SUFFIX: &str = "index";

/// One rewritten route component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, emitted as-is.
    Literal(&'a str),
    /// `[name]`, emitted as `:name`.
    Parameter(&'a str),
    /// `[...name]`, emitted as `**`.
    CatchAll(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a single path component.
    ///
    /// Returns `None` for malformed bracket usage: a bracket that does not
    /// wrap the whole component, or an empty `[]`.
    pub fn parse(component: &'a str) -> Option<Self> {
        let wrapped = component.len() >= 2 && component.starts_with('[') && component.ends_with(']');

        if !wrapped {
            if component.contains(['[', ']']) {
                return None;
            }
            return Some(Segment::Literal(component));
        }

        let inner = &component[1..component.len() - 1];
        if inner.is_empty() {
            return None;
        }

        Some(match inner.strip_prefix(CATCH_ALL_MARKER) {
            Some(name) => Segment::CatchAll(name),
            None => Segment::Parameter(inner),
        })
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Parameter(name) => write!(f, ":{}", name),
            Segment::CatchAll(_) => f.write_str("**"),
        }
    }
}

/// Whether the index rule drops `component` from the route.
pub fn is_index_component(component: &str) -> bool {
    component.ends_with(INDEX_SUFFIX)
}

/// Split a relative page path into its route components, suffix stripped.
pub fn path_components<'a>(relative_path: &'a str, suffix: &str) -> impl Iterator<Item = &'a str> {
    relative_path
        .strip_suffix(suffix)
        .unwrap_or(relative_path)
        .split('/')
        .filter(|c| !c.is_empty())
}

/// Derive the route path for a page file.
///
/// `relative_path` is the root-relative, `/`-separated path including the
/// source suffix. The root route is the empty string.
pub fn route_path(relative_path: &str, suffix: &str) -> Result<String> {
    let mut segments = Vec::new();

    for component in path_components(relative_path, suffix) {
        if is_index_component(component) {
            continue;
        }
        let segment = Segment::parse(component)
            .ok_or_else(|| Error::invalid_parameter(component, relative_path))?;
        segments.push(segment.to_string());
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> String {
        route_path(path, ".swift").unwrap()
    }

    #[test]
    fn test_root_index() {
        assert_eq!(route("index.swift"), "");
    }

    #[test]
    fn test_dotted_index_is_elided() {
        assert_eq!(route("hello/hello.index.swift"), "hello");
    }

    #[test]
    fn test_nested_index() {
        assert_eq!(route("api/index.swift"), "api");
        assert_eq!(route("api/v1/index.swift"), "api/v1");
    }

    #[test]
    fn test_plain_file_name() {
        assert_eq!(route("api/hello.swift"), "api/hello");
    }

    #[test]
    fn test_any_index_suffix_is_elided() {
        assert_eq!(route("blog/archindex.swift"), "blog");
        assert_eq!(route("reindex/page.swift"), "page");
    }

    #[test]
    fn test_parameter() {
        assert_eq!(route("user/[id].swift"), "user/:id");
        assert_eq!(route("[org]/[repo]/index.swift"), ":org/:repo");
    }

    #[test]
    fn test_catch_all_ignores_name() {
        assert_eq!(route("user/[...id].swift"), "user/**");
        assert_eq!(route("user/[...slug].swift"), "user/**");
        assert_eq!(route("files/[...].swift"), "files/**");
    }

    #[test]
    fn test_double_brackets_keep_inner_text() {
        assert_eq!(route("[[foo]].swift"), ":[foo]");
    }

    #[test]
    fn test_empty_components_are_dropped() {
        assert_eq!(route("api//hello.swift"), "api/hello");
    }

    #[test]
    fn test_custom_suffix() {
        assert_eq!(route_path("api/hello.page", ".page").unwrap(), "api/hello");
    }

    #[test]
    fn test_unclosed_bracket_is_rejected() {
        let err = route_path("user/[id.swift", ".swift").unwrap_err();
        match *err {
            Error::InvalidParameter { component, path } => {
                assert_eq!(component, "[id");
                assert_eq!(path, "user/[id.swift");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_inner_bracket_is_rejected() {
        assert!(route_path("a[b]c.swift", ".swift").is_err());
        assert!(route_path("user]/x.swift", ".swift").is_err());
    }

    #[test]
    fn test_empty_parameter_is_rejected() {
        assert!(route_path("user/[].swift", ".swift").is_err());
    }

    #[test]
    fn test_segment_parse() {
        assert_eq!(Segment::parse("api"), Some(Segment::Literal("api")));
        assert_eq!(Segment::parse("[id]"), Some(Segment::Parameter("id")));
        assert_eq!(Segment::parse("[...rest]"), Some(Segment::CatchAll("rest")));
        assert_eq!(Segment::parse("["), None);
        assert_eq!(Segment::parse("[]"), None);
    }

    #[test]
    fn test_is_index_component() {
        assert!(is_index_component("index"));
        assert!(is_index_component("hello.index"));
        assert!(is_index_component("archindex"));
        assert!(!is_index_component("indexes"));
    }
}
