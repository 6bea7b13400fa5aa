//! Controller type descriptors.

use serde::{Deserialize, Serialize};

use crate::meta::{Capability, ContextDeclaration, RouteDeclaration};

/// Route declarations attached to one handler method.
///
/// Declarations are repeatable per method; their order here is declaration
/// order and is preserved all the way into the compiled table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRoutes {
    /// Handler method name.
    pub name: String,
    /// Declarations in declaration order.
    pub declarations: Vec<RouteDeclaration>,
}

impl MethodRoutes {
    /// Create a method entry with its declarations.
    pub fn new(name: impl Into<String>, declarations: Vec<RouteDeclaration>) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }
}

/// A registered, resolvable controller/command type.
///
/// This is the static stand-in for runtime reflection: instead of
/// introspecting a class at scan time, the framework registers one
/// descriptor per controller carrying everything the compiler needs -
/// identity, capability set, class-level contexts, and per-method route
/// declarations.
///
/// # Example
///
/// ```
/// use waypost::{RouteDeclaration, TypeDescriptor};
/// use waypost::meta::Capability;
///
/// let desc = TypeDescriptor::new("app::controllers::BlogController")
///     .with_capability(Capability::HttpController)
///     .with_method("index", vec![RouteDeclaration::new("/")]);
/// assert_eq!(desc.short_name(), "BlogController");
/// assert!(desc.is_http_candidate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified type name (e.g. `app::controllers::BlogController`).
    pub qualified_name: String,
    /// Whether the dispatcher can construct this type.
    pub is_instantiable: bool,
    /// Abstract base types carry declarations for subclasses but are never
    /// routed themselves.
    pub is_abstract: bool,
    /// Declared capabilities.
    pub capabilities: Vec<Capability>,
    /// Class-level context declarations.
    pub contexts: Vec<ContextDeclaration>,
    /// Per-method route declarations, in method declaration order.
    pub methods: Vec<MethodRoutes>,
}

impl TypeDescriptor {
    /// Create a concrete, instantiable descriptor with no capabilities.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            is_instantiable: true,
            is_abstract: false,
            capabilities: Vec::new(),
            contexts: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Builder: add a capability.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Builder: mark as abstract (zero entries in every pass).
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Builder: mark as non-instantiable.
    pub fn non_instantiable(mut self) -> Self {
        self.is_instantiable = false;
        self
    }

    /// Builder: add a class-level context declaration.
    pub fn with_context(mut self, context: ContextDeclaration) -> Self {
        self.contexts.push(context);
        self
    }

    /// Builder: add a handler method with its route declarations.
    pub fn with_method(
        mut self,
        name: impl Into<String>,
        declarations: Vec<RouteDeclaration>,
    ) -> Self {
        self.methods.push(MethodRoutes::new(name, declarations));
        self
    }

    /// Short name: the last segment of the qualified name.
    ///
    /// Controller source files are named after it (`BlogController.rs`
    /// declares `BlogController`), so this is the scanner join key.
    pub fn short_name(&self) -> &str {
        self.qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Check if this type carries the given capability.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Check if an HTTP install pass should read this type.
    pub fn is_http_candidate(&self) -> bool {
        self.is_instantiable && !self.is_abstract && self.capabilities.iter().any(Capability::is_http)
    }

    /// Check if a CLI install pass should read this type.
    pub fn is_command_candidate(&self) -> bool {
        self.is_instantiable
            && !self.is_abstract
            && self.capabilities.iter().any(Capability::is_command)
    }

    /// Check if the export pass should read this type (any capability).
    pub fn is_export_candidate(&self) -> bool {
        self.is_instantiable && !self.is_abstract && !self.capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        let desc = TypeDescriptor::new("app::controllers::BlogController");
        assert_eq!(desc.short_name(), "BlogController");

        let bare = TypeDescriptor::new("BlogController");
        assert_eq!(bare.short_name(), "BlogController");
    }

    #[test]
    fn test_http_candidate_filter() {
        let concrete = TypeDescriptor::new("BlogController")
            .with_capability(Capability::HttpController);
        assert!(concrete.is_http_candidate());
        assert!(!concrete.is_command_candidate());

        let abstract_base = TypeDescriptor::new("BaseController")
            .with_capability(Capability::HttpController)
            .abstract_type();
        assert!(!abstract_base.is_http_candidate());

        let helper = TypeDescriptor::new("Helper");
        assert!(!helper.is_http_candidate());
        assert!(!helper.is_export_candidate());
    }

    #[test]
    fn test_command_candidate_filter() {
        let command = TypeDescriptor::new("JobsCommand").with_capability(Capability::Command);
        assert!(command.is_command_candidate());
        assert!(!command.is_http_candidate());
        assert!(command.is_export_candidate());
    }

    #[test]
    fn test_non_instantiable_excluded() {
        let desc = TypeDescriptor::new("Sealed")
            .with_capability(Capability::Routable)
            .non_instantiable();
        assert!(!desc.is_http_candidate());
        assert!(!desc.is_export_candidate());
    }
}
