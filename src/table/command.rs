//! Deferred CLI command bindings.

use serde::Serialize;

use crate::meta::CallbackRef;

/// Contract the external CLI dispatcher implements to receive deferred
/// command bindings.
///
/// `cli_groups` entries are not live routes: the dispatcher enters a group
/// and replays each binding through this trait, exactly once, at its own
/// command-registration time.
pub trait CommandRegistrar {
    /// Register one command pattern against its handler.
    fn command(&mut self, pattern: &str, callback: &CallbackRef);
}

/// One deferred command registration inside a CLI group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandBinding {
    /// CLI command pattern (e.g. `run-daily`).
    pub pattern: String,
    /// Handler reference (`CommandClass::method`).
    pub callback: CallbackRef,
}

impl CommandBinding {
    /// Create a deferred command binding.
    pub fn new(pattern: impl Into<String>, callback: CallbackRef) -> Self {
        Self {
            pattern: pattern.into(),
            callback,
        }
    }

    /// Replay this binding into a registrar.
    pub fn bind(&self, registrar: &mut dyn CommandRegistrar) {
        registrar.command(&self.pattern, &self.callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<(String, String)>,
    }

    impl CommandRegistrar for Recorder {
        fn command(&mut self, pattern: &str, callback: &CallbackRef) {
            self.commands.push((pattern.to_string(), callback.to_string()));
        }
    }

    #[test]
    fn test_bind_replays_into_registrar() {
        let binding = CommandBinding::new("run-daily", CallbackRef::new("JobsCommand", "run"));

        let mut recorder = Recorder::default();
        binding.bind(&mut recorder);

        assert_eq!(
            recorder.commands,
            [("run-daily".to_string(), "JobsCommand::run".to_string())]
        );
    }
}
