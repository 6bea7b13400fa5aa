//! Method-level route declaration.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::MiddlewarePhase;
use crate::error::ValidationError;

/// One HTTP/CLI route binding declared on a controller method.
///
/// An HTTP declaration (`group == None`) binds a URI pattern to the method
/// for a set of HTTP verbs; a CLI declaration (`group == Some(..)`) binds a
/// command pattern inside a command group. Patterns are regex-capable:
/// `/blog/([0-9-.]+)` matches the way the dispatcher's regex engine reads it.
///
/// # Example
///
/// ```
/// use waypost::{MiddlewarePhase, RouteDeclaration};
///
/// let show = RouteDeclaration::new("blog/([0-9]+)").with_methods(["GET", "POST"]);
/// let auth = RouteDeclaration::new("/").with_phase(MiddlewarePhase::Before);
/// let daily = RouteDeclaration::new("run-daily").with_group("jobs");
/// # assert!(show.validate().is_ok());
/// # assert!(auth.validate().is_ok());
/// # assert!(daily.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDeclaration {
    /// URI pattern (regex-capable) or CLI command pattern.
    pub pattern: String,
    /// HTTP verbs this route answers. Ignored for CLI declarations.
    pub methods: Vec<String>,
    /// Fallback error route rather than a normal route.
    pub is_error_handler: bool,
    /// CLI command group; `None` means this is an HTTP route.
    pub group: Option<String>,
    /// Middleware phase.
    pub phase: MiddlewarePhase,
}

impl RouteDeclaration {
    /// Create an HTTP GET declaration for the given pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            methods: vec!["GET".to_string()],
            is_error_handler: false,
            group: None,
            phase: MiddlewarePhase::None,
        }
    }

    /// Builder: replace the HTTP verb set (normalized to uppercase).
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods = methods
            .into_iter()
            .map(|m| m.as_ref().to_ascii_uppercase())
            .collect();
        self
    }

    /// Builder: place this declaration in a CLI command group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Builder: set the middleware phase.
    pub fn with_phase(mut self, phase: MiddlewarePhase) -> Self {
        self.phase = phase;
        self
    }

    /// Builder: mark this declaration as a fallback error route.
    pub fn error_handler(mut self) -> Self {
        self.is_error_handler = true;
        self
    }

    /// Check if this is a CLI declaration.
    #[inline]
    pub fn is_cli(&self) -> bool {
        self.group.is_some()
    }

    /// HTTP verbs to bucket under, defaulting to GET when none declared.
    pub fn effective_methods(&self) -> Vec<String> {
        if self.methods.is_empty() {
            vec!["GET".to_string()]
        } else {
            self.methods.clone()
        }
    }

    /// Structural validation.
    ///
    /// Rejects empty or regex-invalid patterns, error+middleware conflicts,
    /// the `any` phase on HTTP declarations, empty group names, and
    /// malformed method tokens.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pattern.is_empty() {
            return Err(ValidationError::EmptyPattern);
        }
        if let Err(e) = Regex::new(&self.pattern) {
            return Err(ValidationError::InvalidPattern {
                pattern: self.pattern.clone(),
                message: e.to_string(),
            });
        }
        if self.is_error_handler && self.phase.is_middleware() {
            return Err(ValidationError::ErrorMiddlewareConflict);
        }
        match &self.group {
            Some(group) if group.is_empty() => return Err(ValidationError::EmptyGroup),
            None if self.phase.is_any() => return Err(ValidationError::AnyPhaseOutsideCli),
            _ => {}
        }
        for method in &self.methods {
            if method.is_empty() || !method.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ValidationError::InvalidMethod(method.clone()));
            }
        }
        Ok(())
    }
}
