//! Route compiler - folds declared controller metadata into the routing table.
//!
//! One compiler instance builds one table per bootstrap: construct it with
//! the registry, the base group and the CLI-mode flag, run one install pass
//! per context prefix, then move the finished table out with
//! [`RouteCompiler::into_table`]. Per-type configuration errors never abort
//! the pass; they are collected into [`CompileDiagnostics`] and surfaced
//! once the whole directory set has been processed.

mod diagnostics;
mod export;
mod pattern;

pub use diagnostics::{CompileDiagnostic, CompileDiagnostics};
pub use export::{ExportedRoute, ExportedRoutes};

use std::path::Path;

use crate::config::ScanConfig;
use crate::error::{RouterError, ValidationError};
use crate::log;
use crate::meta::{CallbackRef, MiddlewarePhase, WEB_CONTEXT};
use crate::registry::{ControllerRegistry, TypeDescriptor};
use crate::scan::scan;
use crate::table::{CLI_ANY_SECURITY, CommandBinding, CompiledRoute, RoutingTable};

use pattern::{prefix_allows, resolve_pattern};

/// Compiles registered controller metadata into a [`RoutingTable`].
pub struct RouteCompiler<'r> {
    registry: &'r ControllerRegistry,
    base_group: String,
    cli_mode: bool,
    scan: ScanConfig,
    table: RoutingTable,
}

impl<'r> RouteCompiler<'r> {
    /// Create a compiler for one bootstrap pass.
    ///
    /// `base_group` is prepended to every HTTP pattern; `cli_mode` selects
    /// which install passes are live (`install_http` is a no-op under CLI
    /// mode and vice versa).
    pub fn new(
        registry: &'r ControllerRegistry,
        base_group: impl Into<String>,
        cli_mode: bool,
    ) -> Self {
        Self {
            registry,
            base_group: base_group.into(),
            cli_mode,
            scan: ScanConfig::default(),
            table: RoutingTable::new(),
        }
    }

    /// Builder: override the scanner settings.
    pub fn with_scan_config(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    /// The table built so far.
    pub fn table(&self) -> &RoutingTable {
        &self.table
    }

    /// Hand the finished table to the router.
    pub fn into_table(self) -> RoutingTable {
        self.table
    }

    /// Install HTTP routes from every candidate controller beneath `path`.
    ///
    /// Only types that are instantiable, concrete, and carry an HTTP
    /// capability contribute entries. `prefix` restricts the pass to one
    /// context: declarations outside it are skipped (root-pattern middleware
    /// excepted), and class contexts bind their error handler only when
    /// named after the prefix or the default `web` context.
    ///
    /// Returns the number of installed entries, or
    /// [`RouterError::Diagnostics`] when any type failed; entries compiled
    /// from healthy types are retained either way.
    pub fn install_http(&mut self, path: &Path, prefix: &str) -> Result<usize, RouterError> {
        if self.cli_mode {
            return Ok(0);
        }

        let registry = self.registry;
        let mut diagnostics = CompileDiagnostics::new();
        let mut installed = 0;

        for entry in scan(path, &self.scan)? {
            let Some(desc) = registry.resolve(&entry.basename) else {
                diagnostics.error(
                    entry.path,
                    entry.basename.as_str(),
                    format!("no registered controller type for `{}`", entry.basename),
                );
                continue;
            };
            if !desc.is_http_candidate() {
                continue;
            }
            match self.install_http_type(desc, prefix) {
                Ok(count) => installed += count,
                Err(e) => diagnostics.error(entry.path, desc.short_name(), e.to_string()),
            }
        }

        self.table.shrink_to_fit();
        log!(
            "compile";
            "installed {} http entr{} from {}",
            installed,
            if installed == 1 { "y" } else { "ies" },
            path.display()
        );

        diagnostics.into_result().map_err(RouterError::Diagnostics)?;
        Ok(installed)
    }

    /// Install one controller's HTTP declarations.
    ///
    /// The first CLI-group declaration encountered aborts the remaining
    /// HTTP processing for the whole class (see DESIGN.md).
    fn install_http_type(
        &mut self,
        desc: &TypeDescriptor,
        prefix: &str,
    ) -> Result<usize, ValidationError> {
        let mut installed = 0;

        for context in &desc.contexts {
            if let Some(on_error) = &context.on_error
                && (context.name == prefix || context.name == WEB_CONTEXT)
            {
                self.table.bind_error(context.pattern.clone(), on_error.clone());
                installed += 1;
            }
        }

        'methods: for method in &desc.methods {
            for decl in &method.declarations {
                if decl.group.is_some() {
                    break 'methods;
                }
                decl.validate()?;

                let pattern = resolve_pattern(&self.base_group, &decl.pattern);
                if !prefix_allows(prefix, &pattern, decl.phase) {
                    continue;
                }
                let callback = CallbackRef::new(desc.short_name(), &method.name);

                for verb in decl.effective_methods() {
                    if decl.is_error_handler {
                        self.table.bind_error(pattern.clone(), callback.clone());
                    } else {
                        let route = |is_middleware| {
                            CompiledRoute::new(pattern.clone(), callback.clone(), is_middleware)
                        };
                        match decl.phase {
                            MiddlewarePhase::None => self.table.push_route(&verb, route(false)),
                            MiddlewarePhase::Before => {
                                self.table.push_middleware(&verb, route(true));
                            }
                            MiddlewarePhase::After => self.table.push_after(&verb, route(false)),
                            // Rejected by validate() above.
                            MiddlewarePhase::Any => continue,
                        }
                    }
                    installed += 1;
                }
            }
        }

        Ok(installed)
    }

    /// Install CLI command bindings from every candidate type beneath `path`.
    ///
    /// Only live under CLI mode, restricted to `Command` types, and only
    /// reads declarations carrying a group. Middleware declarations land in
    /// `cli_middleware` (keyed `"any"` for global middleware, else by
    /// group); plain declarations become deferred [`CommandBinding`]s.
    pub fn install_cli(&mut self, path: &Path) -> Result<usize, RouterError> {
        if !self.cli_mode {
            return Ok(0);
        }

        let registry = self.registry;
        let mut diagnostics = CompileDiagnostics::new();
        let mut installed = 0;

        for entry in scan(path, &self.scan)? {
            let Some(desc) = registry.resolve(&entry.basename) else {
                diagnostics.error(
                    entry.path,
                    entry.basename.as_str(),
                    format!("no registered controller type for `{}`", entry.basename),
                );
                continue;
            };
            if !desc.is_command_candidate() {
                continue;
            }
            match self.install_cli_type(desc) {
                Ok(count) => installed += count,
                Err(e) => diagnostics.error(entry.path, desc.short_name(), e.to_string()),
            }
        }

        self.table.shrink_to_fit();
        log!(
            "compile";
            "installed {} cli entr{} from {}",
            installed,
            if installed == 1 { "y" } else { "ies" },
            path.display()
        );

        diagnostics.into_result().map_err(RouterError::Diagnostics)?;
        Ok(installed)
    }

    fn install_cli_type(&mut self, desc: &TypeDescriptor) -> Result<usize, ValidationError> {
        let mut installed = 0;

        for method in &desc.methods {
            for decl in &method.declarations {
                let Some(group) = &decl.group else {
                    continue;
                };
                decl.validate()?;

                let callback = CallbackRef::new(desc.short_name(), &method.name);
                if decl.phase.is_middleware() {
                    let security = if decl.phase.is_any() {
                        CLI_ANY_SECURITY
                    } else {
                        group.as_str()
                    };
                    self.table.push_cli_middleware(
                        security,
                        CompiledRoute::new(group.clone(), callback, true),
                    );
                } else {
                    self.table
                        .push_cli_binding(group, CommandBinding::new(decl.pattern.clone(), callback));
                }
                installed += 1;
            }
        }

        Ok(installed)
    }

    /// Export every declaration beneath `path` for introspection/tooling.
    ///
    /// Combined and context-inferring: covers HTTP and CLI types regardless
    /// of CLI mode, classifying declarations by pattern shape rather than by
    /// install pass. Not a dispatch structure.
    pub fn export(&self, path: &Path) -> Result<ExportedRoutes, RouterError> {
        let mut diagnostics = CompileDiagnostics::new();
        let mut exported = ExportedRoutes::default();

        for entry in scan(path, &self.scan)? {
            let Some(desc) = self.registry.resolve(&entry.basename) else {
                diagnostics.error(
                    entry.path,
                    entry.basename.as_str(),
                    format!("no registered controller type for `{}`", entry.basename),
                );
                continue;
            };
            if !desc.is_export_candidate() {
                continue;
            }
            if let Err(e) = export_type(desc, &mut exported) {
                diagnostics.error(entry.path, desc.short_name(), e.to_string());
            }
        }

        log!(
            "export";
            "exported {} declaration{} from {}",
            exported.len(),
            if exported.len() == 1 { "" } else { "s" },
            path.display()
        );

        diagnostics.into_result().map_err(RouterError::Diagnostics)?;
        Ok(exported)
    }
}

fn export_type(desc: &TypeDescriptor, exported: &mut ExportedRoutes) -> Result<(), ValidationError> {
    for method in &desc.methods {
        for decl in &method.declarations {
            decl.validate()?;
            exported.add(decl, CallbackRef::new(desc.short_name(), &method.name));
        }
    }
    Ok(())
}
