//! Class scanner - enumerates candidate controller source files.
//!
//! The scan is recursive, follows symlinks, and yields entries in a
//! deterministic per-directory name order (serial walk, sorted listings),
//! so the compiled table's bucket ordering is reproducible across
//! platforms. Unreadable entries are skipped; only a missing root is fatal.

use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::debug;
use crate::error::RouterError;

/// A discovered candidate source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name without extension; the registry join key.
    pub basename: String,
    /// Full path of the source file.
    pub path: PathBuf,
}

/// Lazy, single-pass iterator over candidate controller files.
///
/// Finite and not restartable: re-invoke [`scan`] to enumerate again.
pub struct ControllerScan {
    inner: jwalk::DirEntryIter<((), ())>,
    extension: String,
    exclude: Vec<String>,
}

impl std::fmt::Debug for ControllerScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerScan")
            .field("extension", &self.extension)
            .field("exclude", &self.exclude)
            .finish_non_exhaustive()
    }
}

/// Start a scan beneath `root`.
///
/// Fails with [`RouterError::NotFound`] when the root does not exist.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ControllerScan, RouterError> {
    if !root.exists() {
        return Err(RouterError::NotFound(root.to_path_buf()));
    }

    let inner = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .into_iter();

    Ok(ControllerScan {
        inner,
        extension: config.extension.clone(),
        exclude: config.exclude.clone(),
    })
}

impl Iterator for ControllerScan {
    type Item = FileEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    // Best-effort enumeration: a file that cannot be read
                    // must not abort the remaining tree.
                    debug!("scan"; "skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if self.exclude.iter().any(|excluded| excluded == name) {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            let Some(basename) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            return Some(FileEntry {
                basename: basename.to_string(),
                path,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    fn collect(root: &Path) -> Vec<FileEntry> {
        scan(root, &ScanConfig::default()).unwrap().collect()
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = scan(&dir.path().join("nope"), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, RouterError::NotFound(_)));
    }

    #[test]
    fn test_flat_directory_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "BlogController.rs");
        touch(dir.path(), "AdminController.rs");
        touch(dir.path(), "UserController.rs");

        let names: Vec<_> = collect(dir.path())
            .into_iter()
            .map(|e| e.basename)
            .collect();
        assert_eq!(
            names,
            ["AdminController", "BlogController", "UserController"]
        );
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("admin").join("reports");
        fs::create_dir_all(&nested).unwrap();
        touch(dir.path(), "BlogController.rs");
        touch(&nested, "ReportController.rs");

        let names: Vec<_> = collect(dir.path())
            .into_iter()
            .map(|e| e.basename)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"BlogController".to_string()));
        assert!(names.contains(&"ReportController".to_string()));
    }

    #[test]
    fn test_filters_extension_and_exclusions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "BlogController.rs");
        touch(dir.path(), "application.rs"); // bootstrap sentinel
        touch(dir.path(), "notes.md");
        touch(dir.path(), "Makefile");

        let names: Vec<_> = collect(dir.path())
            .into_iter()
            .map(|e| e.basename)
            .collect();
        assert_eq!(names, ["BlogController"]);
    }

    #[test]
    fn test_deterministic_across_passes() {
        let dir = TempDir::new().unwrap();
        for name in ["C.rs", "A.rs", "B.rs"] {
            touch(dir.path(), name);
        }

        let first = collect(dir.path());
        let second = collect(dir.path());
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_directory_symlinks() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        touch(&real, "LinkedController.rs");

        let root = dir.path().join("root");
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&real, root.join("linked")).unwrap();

        let names: Vec<_> = collect(&root).into_iter().map(|e| e.basename).collect();
        assert_eq!(names, ["LinkedController"]);
    }
}
