//! Per-type compile diagnostics.
//!
//! A compile pass does not stop at the first bad controller: every candidate
//! is processed and per-type failures are collected here, then surfaced as
//! one error after the pass.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;

/// A single per-type configuration error
#[derive(Debug, Clone)]
pub struct CompileDiagnostic {
    /// Source file the type was scanned from.
    pub file: PathBuf,
    /// Type short name (or file basename when unresolvable).
    pub type_name: String,
    /// Error description.
    pub message: String,
}

impl CompileDiagnostic {
    pub fn new(file: PathBuf, type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file,
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CompileDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.type_name.cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        write!(f, "\n  {} {}", "in:".dimmed(), self.file.display())
    }
}

/// Collected per-type configuration errors for one compile pass
#[derive(Debug, Clone, Default)]
pub struct CompileDiagnostics {
    errors: Vec<CompileDiagnostic>,
}

impl CompileDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a per-type error.
    pub fn error(&mut self, file: PathBuf, type_name: impl Into<String>, message: impl Into<String>) {
        self.errors.push(CompileDiagnostic::new(file, type_name, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[CompileDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for CompileDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "route compilation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for CompileDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert!(CompileDiagnostics::new().into_result().is_ok());

        let mut diagnostics = CompileDiagnostics::new();
        diagnostics.error(
            PathBuf::from("BlogController.rs"),
            "BlogController",
            "route pattern must not be empty",
        );
        let err = diagnostics.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_display_lists_each_error() {
        let mut diagnostics = CompileDiagnostics::new();
        diagnostics.error(PathBuf::from("A.rs"), "A", "first problem");
        diagnostics.error(PathBuf::from("B.rs"), "B", "second problem");

        let display = format!("{diagnostics}");
        assert!(display.contains("first problem"));
        assert!(display.contains("second problem"));
        assert!(display.contains("A.rs"));
    }
}
