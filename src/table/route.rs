//! Compiled route - the dispatch-ready form of a declaration.

use serde::Serialize;

use crate::meta::CallbackRef;

/// One entry in the routing table.
///
/// The pattern is fully resolved (base-group-prefixed and trimmed); the
/// callback names the handler the dispatcher invokes. Entries keep their
/// insertion order inside each bucket, which is what gives the external
/// router its first-match-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledRoute {
    /// Fully resolved URI or command pattern.
    pub pattern: String,
    /// Handler reference (`ClassName::methodName`).
    pub callback: CallbackRef,
    /// Whether this entry runs in the before-middleware phase.
    pub is_middleware: bool,
}

impl CompiledRoute {
    /// Create a compiled route entry.
    pub fn new(pattern: impl Into<String>, callback: CallbackRef, is_middleware: bool) -> Self {
        Self {
            pattern: pattern.into(),
            callback,
            is_middleware,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let route = CompiledRoute::new("/", CallbackRef::new("BlogController", "index"), false);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["pattern"], "/");
        assert_eq!(json["callback"], "BlogController::index");
        assert_eq!(json["is_middleware"], false);
    }
}
