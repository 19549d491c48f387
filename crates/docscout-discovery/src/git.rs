//! File listing via the git index

use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// List tracked plus untracked-but-not-ignored files, relative to `root`.
///
/// Returns `None` when git cannot be spawned or exits non-zero (not a work
/// tree, git missing); the caller falls back to a filesystem walk.
pub(crate) async fn list_files(root: &Path) -> Option<Vec<String>> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["ls-files", "--cached", "--others", "--exclude-standard", "-z"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        debug!(
            status = ?output.status.code(),
            "git ls-files failed, falling back to filesystem walk"
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(
        stdout
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
