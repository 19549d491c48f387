//! Fallback filesystem walk
//!
//! Walks the static-prefix directories of the pattern set, skipping
//! well-known build and dependency directories. Inaccessible entries are
//! logged and skipped rather than aborting the scan.

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into during the fallback walk.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    ".git",
    "dist",
    "build",
    "vendor",
    "__pycache__",
    ".venv",
];

/// Walk each scope directory under `root` and collect root-relative file
/// paths with `/` separators. An empty scope means the root itself.
pub(crate) fn walk_files(root: &Path, scopes: &[String]) -> Vec<String> {
    // overlapping scopes may yield the same file twice
    let mut files = BTreeSet::new();

    for scope in scopes {
        let start = if scope.is_empty() {
            root.to_path_buf()
        } else {
            root.join(scope)
        };
        if !start.is_dir() {
            debug!(scope = %start.display(), "walk scope does not exist, skipping");
            continue;
        }

        for entry in WalkDir::new(&start)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping inaccessible entry during walk");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(relative) = relative_path(root, entry.path()) {
                files.insert(relative);
            }
        }
    }

    files.into_iter().collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Root-relative path with `/` separators, or `None` for non-UTF-8
/// components.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in relative.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(component.as_os_str().to_str()?);
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
