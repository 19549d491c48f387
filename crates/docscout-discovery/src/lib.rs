//! Candidate file discovery
//!
//! Produces the set of relative file paths a project root offers for
//! pattern filtering. The primary strategy asks git for tracked plus
//! untracked-but-not-ignored files; when git is unavailable or the root is
//! not a work tree, a filesystem walk scoped by the patterns' static
//! prefixes takes over. The returned candidate set is a superset: the
//! caller applies the compiled patterns as the authoritative filter.

pub mod error;
mod git;
mod walk;

pub use error::DiscoveryError;

use docscout_pattern::{static_prefix, PatternSet};
use std::path::Path;
use tracing::debug;

/// List candidate relative paths under `root`.
///
/// `patterns` only scope the fallback walk; no pattern filtering happens
/// here.
pub async fn candidate_files(
    root: &Path,
    patterns: &PatternSet,
) -> Result<Vec<String>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::RootNotFound {
            root: root.to_path_buf(),
        });
    }

    if let Some(files) = git::list_files(root).await {
        debug!(count = files.len(), "candidates listed from git index");
        return Ok(files);
    }

    let scopes = walk_scopes(patterns);
    let files = walk::walk_files(root, &scopes);
    debug!(count = files.len(), "candidates from filesystem walk");
    Ok(files)
}

/// The deduplicated static prefixes to walk. Any pattern whose first
/// segment is a wildcard forces a walk of the whole root.
fn walk_scopes(patterns: &PatternSet) -> Vec<String> {
    let mut scopes: Vec<String> = patterns
        .sources()
        .iter()
        .map(|source| static_prefix(source).to_string())
        .collect();
    scopes.sort();
    scopes.dedup();
    if scopes.iter().any(|scope| scope.is_empty()) {
        return vec![String::new()];
    }
    scopes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_scopes_deduplicates_prefixes() {
        let set = PatternSet::parse("docs/**/*.md,docs/*.mdc,guides/*.md");
        assert_eq!(walk_scopes(&set), vec!["docs", "guides"]);
    }

    #[test]
    fn test_wildcard_first_segment_walks_whole_root() {
        let set = PatternSet::parse("docs/*.md,**/*.mdc");
        assert_eq!(walk_scopes(&set), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let set = PatternSet::parse("docs/*.md");
        let result = candidate_files(Path::new("/nonexistent/docscout-root"), &set).await;
        assert!(matches!(result, Err(DiscoveryError::RootNotFound { .. })));
    }
}
