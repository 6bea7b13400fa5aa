//! Controller capability classification.

use serde::{Deserialize, Serialize};

/// What kind of routable surface a controller type exposes.
///
/// This drives the candidate filter: an HTTP install pass only reads types
/// with one of the HTTP capabilities, a CLI pass only reads [`Command`]
/// types.
///
/// [`Command`]: Capability::Command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Implements the routable interface directly.
    Routable,
    /// Extends the base HTTP controller.
    HttpController,
    /// Extends the base view (template-rendering) controller.
    ViewController,
    /// Extends the base CLI command.
    Command,
}

impl Capability {
    /// Check if this capability makes a type an HTTP route candidate.
    #[inline]
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Self::Routable | Self::HttpController | Self::ViewController
        )
    }

    /// Check if this capability makes a type a CLI command candidate.
    #[inline]
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_capabilities() {
        assert!(Capability::Routable.is_http());
        assert!(Capability::HttpController.is_http());
        assert!(Capability::ViewController.is_http());
        assert!(!Capability::Command.is_http());
    }

    #[test]
    fn test_command_capability() {
        assert!(Capability::Command.is_command());
        assert!(!Capability::HttpController.is_command());
    }
}
