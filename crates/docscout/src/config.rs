use serde::Deserialize;
use std::path::PathBuf;

/// Glob patterns applied when `DOCSCOUT_DOC_PATTERNS` is unset.
pub const DEFAULT_DOC_PATTERNS: &str = "docs/**/*.{md,mdc}";

/// Environment-driven configuration, prefix `DOCSCOUT_`.
///
/// The feature is opt-in: without `DOCSCOUT_ENABLED` and
/// `DOCSCOUT_PROJECT_DIR` the pipeline produces no output at all.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// `DOCSCOUT_ENABLED`: feature flag.
    #[serde(default)]
    pub enabled: bool,
    /// `DOCSCOUT_PROJECT_DIR`: project root to scan.
    #[serde(default)]
    pub project_dir: Option<PathBuf>,
    /// `DOCSCOUT_DOC_PATTERNS`: comma-separated glob override.
    #[serde(default)]
    pub doc_patterns: Option<String>,
    /// `DOCSCOUT_LOG`: log filter used at startup.
    #[serde(default = "default_log_level")]
    pub log: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from the process environment, with a local `.env`
    /// file as a convenience layer.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("DOCSCOUT").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The effective pattern string.
    pub fn patterns(&self) -> &str {
        self.doc_patterns.as_deref().unwrap_or(DEFAULT_DOC_PATTERNS)
    }
}
