//! Error types for file discovery

use std::path::PathBuf;
use thiserror::Error;

/// Discovery errors
///
/// Strategy failures (git unavailable, unreadable directory entries) are
/// recovered or skipped locally; only a root that cannot be scanned at all
/// surfaces as an error.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Configured project root does not exist or is not a directory
    #[error("project root {root:?} is not a directory")]
    RootNotFound {
        /// The configured root path
        root: PathBuf,
    },
}
