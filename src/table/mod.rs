//! Routing table - the compiled output structure and its query contract.
//!
//! The compiler is the table's only writer; after [`RouteCompiler::into_table`]
//! the structure is handed to the external router by move and must be treated
//! as immutable. A long-running process that wants to rebuild must compile a
//! fresh table and swap it atomically.
//!
//! [`RouteCompiler::into_table`]: crate::compiler::RouteCompiler::into_table

mod command;
mod errors;
mod route;

pub use command::{CommandBinding, CommandRegistrar};
pub use errors::ErrorBindings;
pub use route::CompiledRoute;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::meta::CallbackRef;

/// Key under which CLI middleware is grouped.
pub const CLI_KEY: &str = "CLI";

/// Security key for global CLI middleware (`MiddlewarePhase::Any`).
pub const CLI_ANY_SECURITY: &str = "any";

/// The compiled routing table.
///
/// Buckets (the external contract):
/// - `routes`: HTTP method → main routes
/// - `routes_middleware`: HTTP method → before-phase middleware
/// - `routes_after`: HTTP method → after-phase middleware
/// - `errors`: pattern → fallback handler
/// - `cli_groups`: group name → deferred command bindings
/// - `cli_middleware`: `"CLI"` → security key → middleware entries
///
/// Sequences preserve insertion order: declaration order within a class,
/// classes in path-sorted scan order. First-match dispatch relies on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutingTable {
    routes: FxHashMap<String, Vec<CompiledRoute>>,
    routes_middleware: FxHashMap<String, Vec<CompiledRoute>>,
    routes_after: FxHashMap<String, Vec<CompiledRoute>>,
    errors: ErrorBindings,
    cli_groups: FxHashMap<String, Vec<CommandBinding>>,
    cli_middleware: FxHashMap<String, FxHashMap<String, Vec<CompiledRoute>>>,
}

impl RoutingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Main routes for an HTTP method, in dispatch order.
    pub fn routes(&self, method: &str) -> &[CompiledRoute] {
        self.routes.get(method).map_or(&[], Vec::as_slice)
    }

    /// Before-phase middleware for an HTTP method.
    pub fn middleware(&self, method: &str) -> &[CompiledRoute] {
        self.routes_middleware.get(method).map_or(&[], Vec::as_slice)
    }

    /// After-phase middleware for an HTTP method.
    pub fn after(&self, method: &str) -> &[CompiledRoute] {
        self.routes_after.get(method).map_or(&[], Vec::as_slice)
    }

    /// Full dispatch sequence for `(context, method)` lookups: before-phase
    /// middleware, then main routes, then after-phase middleware, each in
    /// insertion order.
    pub fn dispatch_order(&self, method: &str) -> impl Iterator<Item = &CompiledRoute> {
        self.middleware(method)
            .iter()
            .chain(self.routes(method))
            .chain(self.after(method))
    }

    /// Error-context bindings.
    pub fn errors(&self) -> &ErrorBindings {
        &self.errors
    }

    /// Fallback handler bound to an exact pattern.
    pub fn error_handler(&self, pattern: &str) -> Option<&CallbackRef> {
        self.errors.get(pattern)
    }

    /// Deferred command bindings for a CLI group.
    pub fn cli_group(&self, group: &str) -> &[CommandBinding] {
        self.cli_groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Names of all CLI groups with at least one binding.
    pub fn cli_group_names(&self) -> impl Iterator<Item = &str> {
        self.cli_groups.keys().map(String::as_str)
    }

    /// CLI middleware entries for a security key (`"any"` or a group name).
    pub fn cli_middleware(&self, security: &str) -> &[CompiledRoute] {
        self.cli_middleware
            .get(CLI_KEY)
            .and_then(|by_security| by_security.get(security))
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of entries across every bucket.
    pub fn len(&self) -> usize {
        let http: usize = self
            .routes
            .values()
            .chain(self.routes_middleware.values())
            .chain(self.routes_after.values())
            .map(Vec::len)
            .sum();
        let cli: usize = self.cli_groups.values().map(Vec::len).sum();
        let cli_mw: usize = self
            .cli_middleware
            .values()
            .flat_map(|by_security| by_security.values())
            .map(Vec::len)
            .sum();
        http + cli + cli_mw + self.errors.len()
    }

    /// Check if the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // === Construction (compiler only) ===

    pub(crate) fn push_route(&mut self, method: &str, route: CompiledRoute) {
        self.routes.entry(method.to_string()).or_default().push(route);
    }

    pub(crate) fn push_middleware(&mut self, method: &str, route: CompiledRoute) {
        self.routes_middleware
            .entry(method.to_string())
            .or_default()
            .push(route);
    }

    pub(crate) fn push_after(&mut self, method: &str, route: CompiledRoute) {
        self.routes_after
            .entry(method.to_string())
            .or_default()
            .push(route);
    }

    pub(crate) fn bind_error(&mut self, pattern: impl Into<String>, callback: CallbackRef) {
        self.errors.bind(pattern, callback);
    }

    pub(crate) fn push_cli_binding(&mut self, group: &str, binding: CommandBinding) {
        self.cli_groups
            .entry(group.to_string())
            .or_default()
            .push(binding);
    }

    pub(crate) fn push_cli_middleware(&mut self, security: &str, route: CompiledRoute) {
        self.cli_middleware
            .entry(CLI_KEY.to_string())
            .or_default()
            .entry(security.to_string())
            .or_default()
            .push(route);
    }

    /// Best-effort memory-reclamation hint, run once after an install pass.
    pub(crate) fn shrink_to_fit(&mut self) {
        for bucket in [
            &mut self.routes,
            &mut self.routes_middleware,
            &mut self.routes_after,
        ] {
            bucket.values_mut().for_each(Vec::shrink_to_fit);
            bucket.shrink_to_fit();
        }
        self.cli_groups.values_mut().for_each(Vec::shrink_to_fit);
        self.cli_groups.shrink_to_fit();
        for by_security in self.cli_middleware.values_mut() {
            by_security.values_mut().for_each(Vec::shrink_to_fit);
            by_security.shrink_to_fit();
        }
        self.cli_middleware.shrink_to_fit();
        self.errors.shrink_to_fit();
    }

    /// Dump the table for debugging.
    pub fn dump(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        let mut section = |title: &str, bucket: &FxHashMap<String, Vec<CompiledRoute>>| {
            let total: usize = bucket.values().map(Vec::len).sum();
            writeln!(output, "=== {title} ({total}) ===").unwrap();
            let mut methods: Vec<_> = bucket.keys().collect();
            methods.sort();
            for method in methods {
                for route in &bucket[method] {
                    writeln!(output, "  {} {} → {}", method, route.pattern, route.callback)
                        .unwrap();
                }
            }
        };

        section("Routes", &self.routes);
        section("Middleware (before)", &self.routes_middleware);
        section("Middleware (after)", &self.routes_after);

        writeln!(output, "=== Errors ({}) ===", self.errors.len()).unwrap();
        let mut errors: Vec<_> = self.errors.iter().collect();
        errors.sort_by(|a, b| a.0.cmp(b.0));
        for (pattern, callback) in errors {
            writeln!(output, "  {pattern} → {callback}").unwrap();
        }

        let cli_total: usize = self.cli_groups.values().map(Vec::len).sum();
        writeln!(output, "=== CLI groups ({cli_total}) ===").unwrap();
        let mut groups: Vec<_> = self.cli_groups.keys().collect();
        groups.sort();
        for group in groups {
            for binding in &self.cli_groups[group] {
                writeln!(output, "  {} {} → {}", group, binding.pattern, binding.callback)
                    .unwrap();
            }
        }

        if let Some(by_security) = self.cli_middleware.get(CLI_KEY) {
            let mw_total: usize = by_security.values().map(Vec::len).sum();
            writeln!(output, "=== CLI middleware ({mw_total}) ===").unwrap();
            let mut keys: Vec<_> = by_security.keys().collect();
            keys.sort();
            for security in keys {
                for route in &by_security[security] {
                    writeln!(output, "  [{}] {} → {}", security, route.pattern, route.callback)
                        .unwrap();
                }
            }
        }

        output
    }
}
