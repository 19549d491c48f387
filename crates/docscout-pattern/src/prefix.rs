//! Static-prefix extraction
//!
//! Derives the longest leading path-segment sequence of a glob pattern that
//! is guaranteed wildcard-free. Discovery uses it to bound a fallback
//! directory walk; it is a hint only, and every discovered path is still
//! re-tested against the compiled patterns.

/// The wildcard-free leading segments of `pattern`, without a trailing
/// separator.
///
/// Scans up to the first `*`, `?`, `{` or `[`, then truncates back to the
/// last separator boundary so a partial final segment is discarded. Returns
/// the empty string when a wildcard appears in the first segment.
pub fn static_prefix(pattern: &str) -> &str {
    let stem = match pattern.find(['*', '?', '{', '[']) {
        Some(wildcard) => &pattern[..wildcard],
        None => pattern,
    };
    match stem.rfind('/') {
        Some(separator) => &pattern[..separator],
        None => "",
    }
}
