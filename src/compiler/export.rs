//! Context-inferring route export for introspection and tooling.
//!
//! Unlike the install passes, export does not build a dispatch table: it
//! classifies every declaration into `http`/`api`/`cli` buckets from the
//! pattern shape alone, keyed by a bind name, and serializes cleanly to
//! JSON. Buckets are `BTreeMap`-ordered so output is stable run to run.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::meta::{CallbackRef, MiddlewarePhase, RouteDeclaration};

/// One declaration as seen by tooling.
///
/// Patterns are reported as declared (no base-group resolution): export is
/// an introspection view of the controllers, not of a live table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedRoute {
    /// Declared pattern.
    pub pattern: String,
    /// Handler reference.
    pub callback: CallbackRef,
    /// Declared HTTP verbs (empty for CLI).
    pub methods: Vec<String>,
    /// Middleware phase.
    pub phase: MiddlewarePhase,
    /// Whether this is a fallback error route.
    pub error: bool,
}

/// Export buckets: `http`, `api`, `cli`, each keyed by bind name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportedRoutes {
    /// Plain web routes, keyed by first path segment.
    pub http: BTreeMap<String, Vec<ExportedRoute>>,
    /// Routes whose pattern starts with `api`/`/api`, keyed by the segment
    /// after the leading `api`.
    pub api: BTreeMap<String, Vec<ExportedRoute>>,
    /// CLI declarations, keyed by command group.
    pub cli: BTreeMap<String, Vec<ExportedRoute>>,
}

impl ExportedRoutes {
    /// Total number of exported declarations.
    pub fn len(&self) -> usize {
        self.http
            .values()
            .chain(self.api.values())
            .chain(self.cli.values())
            .map(Vec::len)
            .sum()
    }

    /// Check if nothing was exported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to pretty-printed JSON for tooling output.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn add(&mut self, decl: &RouteDeclaration, callback: CallbackRef) {
        let route = ExportedRoute {
            pattern: decl.pattern.clone(),
            callback,
            methods: if decl.is_cli() { Vec::new() } else { decl.effective_methods() },
            phase: decl.phase,
            error: decl.is_error_handler,
        };

        let (bucket, bind) = match &decl.group {
            Some(group) => (&mut self.cli, group.clone()),
            None if is_api_pattern(&decl.pattern) => {
                (&mut self.api, bind_key(&decl.pattern).to_string())
            }
            None => (&mut self.http, bind_key(&decl.pattern).to_string()),
        };
        bucket.entry(bind).or_default().push(route);
    }
}

/// Check if a pattern belongs to the `api` bucket (`api`/`/api` prefix).
fn is_api_pattern(pattern: &str) -> bool {
    pattern.strip_prefix('/').unwrap_or(pattern).starts_with("api")
}

/// Bind key: first path segment, skipping a leading `api` segment.
fn bind_key(pattern: &str) -> &str {
    let mut segments = pattern.split('/').filter(|s| !s.is_empty());
    match segments.next() {
        Some("api") => segments.next().unwrap_or(""),
        Some(first) => first,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_key() {
        assert_eq!(bind_key("/blog/edit"), "blog");
        assert_eq!(bind_key("blog"), "blog");
        assert_eq!(bind_key("/api/users/list"), "users");
        assert_eq!(bind_key("/api"), "");
        assert_eq!(bind_key("/"), "");
    }

    #[test]
    fn test_api_pattern() {
        assert!(is_api_pattern("/api/users"));
        assert!(is_api_pattern("api/users"));
        assert!(!is_api_pattern("/blog/api-docs"));
    }

    #[test]
    fn test_buckets() {
        let mut export = ExportedRoutes::default();
        export.add(
            &RouteDeclaration::new("/blog/index"),
            CallbackRef::new("BlogController", "index"),
        );
        export.add(
            &RouteDeclaration::new("/api/users"),
            CallbackRef::new("UserController", "list"),
        );
        export.add(
            &RouteDeclaration::new("run-daily").with_group("jobs"),
            CallbackRef::new("JobsCommand", "run"),
        );

        assert_eq!(export.len(), 3);
        assert_eq!(export.http["blog"].len(), 1);
        assert_eq!(export.api["users"].len(), 1);
        assert_eq!(export.cli["jobs"].len(), 1);
        // CLI entries carry no HTTP verbs
        assert!(export.cli["jobs"][0].methods.is_empty());
    }

    #[test]
    fn test_json_output() {
        let mut export = ExportedRoutes::default();
        export.add(
            &RouteDeclaration::new("/blog/index"),
            CallbackRef::new("BlogController", "index"),
        );

        let json = export.to_json_pretty().unwrap();
        assert!(json.contains("\"blog\""));
        assert!(json.contains("BlogController::index"));
    }
}
