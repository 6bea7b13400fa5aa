//! Pattern resolution and prefix filtering.

use crate::meta::MiddlewarePhase;

/// Resolve a declared pattern against the base group.
///
/// The declared pattern is trimmed of surrounding slashes and appended to
/// the base group; the trailing slash is right-trimmed only when a base
/// group is set, so the root route stays `/` in ungrouped applications:
///
/// ```text
/// base ""    + "/"               → "/"
/// base ""    + "blog/([0-9]+)"   → "/blog/([0-9]+)"
/// base "v1"  + "blog/([0-9]+)"   → "v1/blog/([0-9]+)"
/// base "v1"  + "/"               → "v1"
/// ```
pub(crate) fn resolve_pattern(base_group: &str, pattern: &str) -> String {
    let resolved = format!("{}/{}", base_group, pattern.trim_matches('/'));
    if base_group.is_empty() {
        resolved
    } else {
        resolved.trim_end_matches('/').to_string()
    }
}

/// Prefix filter for HTTP install passes.
///
/// With an empty prefix everything passes. Otherwise the resolved pattern
/// (left-trimmed of `/`) must start with the prefix - except root-pattern
/// middleware, which applies to the whole surface and is exempt.
pub(crate) fn prefix_allows(prefix: &str, pattern: &str, phase: MiddlewarePhase) -> bool {
    if prefix.is_empty() {
        return true;
    }
    if pattern.trim_start_matches('/').starts_with(prefix) {
        return true;
    }
    phase.is_middleware() && pattern == "/"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_base_group() {
        assert_eq!(resolve_pattern("", "/"), "/");
        assert_eq!(resolve_pattern("", "blog/([0-9]+)"), "/blog/([0-9]+)");
        assert_eq!(resolve_pattern("", "/blog/index/"), "/blog/index");
    }

    #[test]
    fn test_resolve_with_base_group() {
        assert_eq!(resolve_pattern("v1", "blog/([0-9]+)"), "v1/blog/([0-9]+)");
        assert_eq!(resolve_pattern("v1", "/blog/([0-9]+)/"), "v1/blog/([0-9]+)");
        assert_eq!(resolve_pattern("v1", "/"), "v1");
    }

    #[test]
    fn test_prefix_empty_allows_all() {
        assert!(prefix_allows("", "/blog/index", MiddlewarePhase::None));
        assert!(prefix_allows("", "/", MiddlewarePhase::None));
    }

    #[test]
    fn test_prefix_match() {
        assert!(prefix_allows("api", "/api/users", MiddlewarePhase::None));
        assert!(prefix_allows("api", "api/users", MiddlewarePhase::None));
        assert!(!prefix_allows("api", "/blog/index", MiddlewarePhase::None));
    }

    #[test]
    fn test_root_middleware_exempt() {
        // Root-pattern middleware passes the filter regardless of prefix...
        assert!(prefix_allows("api", "/", MiddlewarePhase::Before));
        assert!(prefix_allows("api", "/", MiddlewarePhase::After));
        // ...but a root-pattern plain route does not,
        assert!(!prefix_allows("api", "/", MiddlewarePhase::None));
        // and non-root middleware still has to match the prefix.
        assert!(!prefix_allows("api", "/blog", MiddlewarePhase::Before));
    }
}
