//! Waypost - declarative route compilation for attribute-driven controllers.
//!
//! Controllers and commands describe their routes as plain data
//! ([`RouteDeclaration`]/[`ContextDeclaration`] attached to a
//! [`TypeDescriptor`]). A compile pass scans the controller directory,
//! resolves each source file against the [`ControllerRegistry`], and folds
//! every declaration into a [`RoutingTable`] partitioned by HTTP method,
//! middleware phase and CLI command group. The external router consumes the
//! finished table; waypost never dispatches a request itself.
//!
//! ```no_run
//! use waypost::{ControllerRegistry, RouteCompiler, RouteDeclaration, TypeDescriptor};
//! use waypost::meta::Capability;
//!
//! let mut registry = ControllerRegistry::new();
//! registry.register(
//!     TypeDescriptor::new("app::controllers::BlogController")
//!         .with_capability(Capability::HttpController)
//!         .with_method("index", vec![RouteDeclaration::new("/")]),
//! );
//!
//! let mut compiler = RouteCompiler::new(&registry, "", false);
//! compiler.install_http("src/controllers".as_ref(), "")?;
//! let table = compiler.into_table();
//! assert_eq!(table.routes("GET").len(), 1);
//! # Ok::<(), waypost::RouterError>(())
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod logger;
pub mod meta;
pub mod registry;
pub mod scan;
pub mod table;

pub use compiler::{CompileDiagnostics, ExportedRoutes, RouteCompiler};
pub use config::{RouterConfig, ScanConfig};
pub use error::{RouterError, ValidationError};
pub use meta::{CallbackRef, ContextDeclaration, MiddlewarePhase, RouteDeclaration};
pub use registry::{ControllerRegistry, RouteMetadata, TypeDescriptor};
pub use scan::{ControllerScan, FileEntry};
pub use table::{CommandBinding, CommandRegistrar, CompiledRoute, RoutingTable};
