//! Middleware phase of a route declaration.

use serde::{Deserialize, Serialize};

/// When a route runs relative to the main request pipeline.
///
/// `Any` marks global CLI middleware and is invalid on HTTP declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiddlewarePhase {
    /// Not middleware: an ordinary route handler.
    #[default]
    None,
    /// Runs before the matched route handler.
    Before,
    /// Runs after the matched route handler.
    After,
    /// Global CLI middleware, applied to every command group.
    Any,
}

impl MiddlewarePhase {
    /// Check if this declaration is middleware at all.
    #[inline]
    pub fn is_middleware(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check if this is the before phase.
    #[inline]
    pub fn is_before(&self) -> bool {
        matches!(self, Self::Before)
    }

    /// Check if this is the after phase.
    #[inline]
    pub fn is_after(&self) -> bool {
        matches!(self, Self::After)
    }

    /// Check if this is global CLI middleware.
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Before => "before",
            Self::After => "after",
            Self::Any => "any",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(MiddlewarePhase::default(), MiddlewarePhase::None);
        assert!(!MiddlewarePhase::default().is_middleware());
    }

    #[test]
    fn test_is_middleware() {
        assert!(MiddlewarePhase::Before.is_middleware());
        assert!(MiddlewarePhase::After.is_middleware());
        assert!(MiddlewarePhase::Any.is_middleware());
        assert!(!MiddlewarePhase::None.is_middleware());
    }

    #[test]
    fn test_serialized_form_matches_as_str() {
        for phase in [
            MiddlewarePhase::None,
            MiddlewarePhase::Before,
            MiddlewarePhase::After,
            MiddlewarePhase::Any,
        ] {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.as_str()));
        }
    }
}
