//! Error-context bindings - pattern to fallback handler mapping.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::debug;
use crate::meta::CallbackRef;

/// Fallback error handlers keyed by URI/context pattern.
///
/// Populated from class-level context `on_error` declarations and from
/// method-level error-handler routes. Key collisions resolve last-write-wins
/// (plain map assignment order); the overwrite is logged at debug level so
/// a shadowed handler is observable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorBindings {
    bindings: FxHashMap<String, CallbackRef>,
}

impl ErrorBindings {
    /// Create an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fallback handler for a pattern. Last write wins.
    pub fn bind(&mut self, pattern: impl Into<String>, callback: CallbackRef) {
        let pattern = pattern.into();
        if let Some(previous) = self.bindings.insert(pattern.clone(), callback) {
            debug!(
                "compile";
                "error handler for `{}` overridden (was {})",
                pattern,
                previous
            );
        }
    }

    /// Get the handler bound to an exact pattern.
    pub fn get(&self, pattern: &str) -> Option<&CallbackRef> {
        self.bindings.get(pattern)
    }

    /// Number of bound patterns.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no handlers are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CallbackRef)> {
        self.bindings.iter()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.bindings.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_get() {
        let mut errors = ErrorBindings::new();
        errors.bind("/", CallbackRef::new("ErrorController", "onWebError"));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("/").unwrap().to_string(),
            "ErrorController::onWebError"
        );
        assert!(errors.get("/api").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut errors = ErrorBindings::new();
        errors.bind("/", CallbackRef::new("ErrorController", "first"));
        errors.bind("/", CallbackRef::new("ErrorController", "second"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("/").unwrap().method(), "second");
    }
}
