//! Class-level routing context declaration.

use serde::{Deserialize, Serialize};

use super::CallbackRef;

/// Name of the default routing context.
pub const WEB_CONTEXT: &str = "web";

/// One class-level routing context binding.
///
/// A context names a routing scope (`web`, `api`, a custom prefix) and may
/// carry a fallback handler invoked when a request inside the scope matches
/// no route. A context without `on_error` contributes no error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDeclaration {
    /// Context identifier. Defaults to [`WEB_CONTEXT`].
    pub name: String,
    /// URI prefix pattern this context governs.
    pub pattern: String,
    /// Fallback handler bound when no route matches in this context.
    pub on_error: Option<CallbackRef>,
}

impl ContextDeclaration {
    /// Create a context for the default `web` scope.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            name: WEB_CONTEXT.to_string(),
            pattern: pattern.into(),
            on_error: None,
        }
    }

    /// Builder: use a custom context name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: bind a fallback error handler.
    pub fn with_error(mut self, on_error: CallbackRef) -> Self {
        self.on_error = Some(on_error);
        self
    }
}
