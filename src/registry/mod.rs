//! Controller registry - resolves scanned source files to type descriptors.
//!
//! The registry replaces runtime reflection: the application's bootstrap
//! registers one [`TypeDescriptor`] per controller/command (either literal
//! descriptors or types implementing [`RouteMetadata`]), and the compiler
//! resolves each scanned file's basename against it.

mod descriptor;

pub use descriptor::{MethodRoutes, TypeDescriptor};

use rustc_hash::FxHashMap;

use crate::debug;

/// Types that can describe their own routes.
///
/// Implement this on a controller/command type so the bootstrap can register
/// it with [`ControllerRegistry::register_type`] instead of assembling a
/// descriptor literal at the call site.
pub trait RouteMetadata {
    /// The type's route descriptor.
    fn descriptor() -> TypeDescriptor;
}

/// Registered controller descriptors, keyed by type short name.
///
/// Owned by the bootstrap and borrowed by the compiler for the duration of a
/// compile pass; there is no global registry state.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    by_name: FxHashMap<String, TypeDescriptor>,
}

impl ControllerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its short name.
    ///
    /// Re-registering the same short name replaces the previous descriptor
    /// (logged at debug level).
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        let name = descriptor.short_name().to_string();
        if let Some(previous) = self.by_name.insert(name.clone(), descriptor) {
            debug!(
                "registry";
                "`{}` re-registered, replacing `{}`",
                name,
                previous.qualified_name
            );
        }
    }

    /// Register a self-describing type.
    pub fn register_type<T: RouteMetadata>(&mut self) {
        self.register(T::descriptor());
    }

    /// Resolve a scanned file basename to its descriptor.
    pub fn resolve(&self, basename: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(basename)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over registered descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.by_name.values()
    }
}
