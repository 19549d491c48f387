//! Pipeline orchestration
//!
//! Gates on configuration, compiles the pattern set, discovers candidates,
//! filters them, reads the survivors, extracts descriptions and renders the
//! block. The core stages are pure; the only suspension points are the git
//! listing and the file reads.

use std::path::Path;

use anyhow::{Context, Result};
use docscout_discovery::candidate_files;
use docscout_frontmatter::extract_description;
use docscout_pattern::PatternSet;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::render::{render_block, DocEntry};

/// Run the full pipeline. `Ok(None)` means "produce no output": the feature
/// is disabled, no root is configured, or nothing matched.
pub async fn run(config: &Config) -> Result<Option<String>> {
    if !config.enabled {
        debug!("docscout disabled, producing no output");
        return Ok(None);
    }
    let Some(root) = config.project_dir.as_deref() else {
        debug!("no project root configured, producing no output");
        return Ok(None);
    };

    let patterns = PatternSet::parse(config.patterns());
    if patterns.is_empty() {
        debug!("empty pattern set, producing no output");
        return Ok(None);
    }

    let candidates = candidate_files(root, &patterns)
        .await
        .context("file discovery failed")?;

    let mut matched: Vec<String> = candidates
        .into_iter()
        .filter(|path| patterns.matches(path))
        .collect();
    matched.sort();
    matched.dedup();
    info!(count = matched.len(), "documentation files matched");

    let entries = load_entries(root, matched).await;
    Ok(render_block(&entries))
}

/// Read each matched file and decode its description. Reads are dispatched
/// concurrently; unreadable files are skipped with a warning.
async fn load_entries(root: &Path, paths: Vec<String>) -> Vec<DocEntry> {
    let reads = paths
        .iter()
        .map(|path| tokio::fs::read_to_string(root.join(path)));
    let texts = futures::future::join_all(reads).await;

    paths
        .into_iter()
        .zip(texts)
        .filter_map(|(path, text)| match text {
            Ok(text) => Some(DocEntry {
                description: extract_description(&text),
                path,
            }),
            Err(err) => {
                warn!(%path, error = %err, "skipping unreadable file");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config_for(root: PathBuf, patterns: &str) -> Config {
        Config {
            enabled: true,
            project_dir: Some(root),
            doc_patterns: Some(patterns.to_string()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_disabled_config_produces_no_output() {
        assert_eq!(run(&Config::default()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_root_produces_no_output() {
        let config = Config {
            enabled: true,
            ..Config::default()
        };
        assert_eq!(run(&config).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_matches_produce_no_output() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/main.rs", "fn main() {}\n");

        let config = config_for(dir.path().to_path_buf(), "docs/**/*.md");
        assert_eq!(run(&config).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_pipeline_renders_sorted_entries() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "docs/b.md",
            "---\ndescription: second file\n---\nbody\n",
        );
        write(
            dir.path(),
            "docs/a.md",
            "---\ndescription: first file\n---\nbody\n",
        );
        write(dir.path(), "docs/plain.md", "no frontmatter here\n");
        write(dir.path(), "readme.txt", "not matched\n");

        let config = config_for(dir.path().to_path_buf(), "docs/**/*.md");
        let block = run(&config).await.unwrap().unwrap();

        assert!(block.contains("<doc path=\"docs/a.md\">first file</doc>"));
        assert!(block.contains("<doc path=\"docs/b.md\">second file</doc>"));
        assert!(block.contains("<doc path=\"docs/plain.md\"/>"));
        assert!(!block.contains("readme.txt"));

        let a = block.find("docs/a.md").unwrap();
        let b = block.find("docs/b.md").unwrap();
        assert!(a < b);
    }
}
