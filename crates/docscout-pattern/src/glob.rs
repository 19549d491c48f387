//! Glob-to-regex compilation and pattern-set splitting
//!
//! The glob grammar is translated construct by construct onto the `regex`
//! engine, with every non-glob metacharacter escaped so it matches itself.
//! The rendered expression is anchored at both ends: a pattern matches the
//! whole path or not at all, never a substring.

use regex::Regex;

/// A compiled glob pattern over relative path strings.
///
/// Immutable once built; `matches` is a pure function and compilation is
/// deterministic, so recompiling the same pattern yields an equivalent
/// matcher.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    // The translation only emits well-formed regex syntax, but compilation
    // must be total, so a rejected pattern degrades to literal comparison.
    Literal(String),
}

impl GlobPattern {
    /// Compile a glob pattern. Never fails: malformed syntax is matched
    /// literally rather than rejected.
    pub fn compile(pattern: &str) -> Self {
        let source = format!("^{}$", translate(pattern));
        let matcher = match Regex::new(&source) {
            Ok(re) => Matcher::Regex(re),
            Err(_) => Matcher::Literal(pattern.to_string()),
        };
        Self { matcher }
    }

    /// Test a relative path against the pattern (full-string match).
    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(path),
            Matcher::Literal(literal) => literal == path,
        }
    }
}

/// An ordered set of glob patterns built from a comma-separated string.
#[derive(Debug, Clone)]
pub struct PatternSet {
    sources: Vec<String>,
    patterns: Vec<GlobPattern>,
}

impl PatternSet {
    /// Split a comma-separated pattern string and compile each piece.
    pub fn parse(raw: &str) -> Self {
        let sources = split_patterns(raw);
        let patterns = sources.iter().map(|s| GlobPattern::compile(s)).collect();
        Self { sources, patterns }
    }

    /// The trimmed pattern strings, in input order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Whether the set holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern in the set matches the path.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }
}

/// Split a comma-separated pattern string on top-level commas.
///
/// A comma nested inside a `{...}` group is not a separator. Each piece is
/// trimmed and empty pieces are dropped, so empty or whitespace-only input
/// yields an empty vector.
pub fn split_patterns(raw: &str) -> Vec<String> {
    split_top_level(raw)
        .into_iter()
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Split on commas at brace depth zero, keeping pieces verbatim.
fn split_top_level(raw: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in raw.chars() {
        match c {
            '{' => {
                depth += 1;
                current.push(c);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => pieces.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pieces.push(current);
    pieces
}

/// Translate a glob pattern into (unanchored) regex source.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    // `**/` spans zero or more whole path segments
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    // bare `**` spans anything, separators included
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                // confined to a single path segment
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            '{' => match find_group_end(&chars, i) {
                Some(end) => {
                    let body: String = chars[i + 1..end].iter().collect();
                    let alternatives: Vec<String> = split_top_level(&body)
                        .iter()
                        .map(|alt| translate(alt))
                        .collect();
                    out.push_str("(?:");
                    out.push_str(&alternatives.join("|"));
                    out.push(')');
                    i = end + 1;
                }
                None => {
                    // unterminated group: `{` is an ordinary character
                    out.push_str(&regex::escape("{"));
                    i += 1;
                }
            },
            c => {
                out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
                i += 1;
            }
        }
    }
    out
}

/// Index of the `}` closing the group opened at `open`, brace-depth aware.
fn find_group_end(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &c) in chars[open..].iter().enumerate() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        GlobPattern::compile(pattern).matches(path)
    }

    #[test]
    fn test_literal_pattern_matches_itself_only() {
        let pattern = GlobPattern::compile("docs/readme.md");
        assert!(pattern.matches("docs/readme.md"));
        assert!(!pattern.matches("docs/readme.mdx"));
        assert!(!pattern.matches("xdocs/readme.md"));
        assert!(!pattern.matches("docs/readme_md"));
    }

    #[test]
    fn test_single_star_stays_within_segment() {
        assert!(matches("*.md", "foo.md"));
        assert!(!matches("*.md", "docs/foo.md"));
        assert!(matches("docs/*.md", "docs/foo.md"));
        assert!(!matches("docs/*.md", "docs/a/foo.md"));
    }

    #[test]
    fn test_question_mark_never_crosses_separator() {
        assert!(matches("doc?.md", "docs.md"));
        assert!(!matches("doc?.md", "document.md"));
        assert!(!matches("doc?.md", "doc/.md"));
        assert!(!matches("doc?.md", "doc.md"));
    }

    #[test]
    fn test_double_star_slash_spans_zero_or_more_segments() {
        assert!(matches("docs/**/*.md", "docs/foo.md"));
        assert!(matches("docs/**/*.md", "docs/a/b/c.md"));
        assert!(!matches("docs/**/*.md", "other/foo.md"));
    }

    #[test]
    fn test_trailing_double_star_matches_any_depth() {
        assert!(matches("docs/**", "docs/a"));
        assert!(matches("docs/**", "docs/a/b/c"));
        assert!(!matches("docs/**", "other/a"));
    }

    #[test]
    fn test_brace_alternation() {
        assert!(matches("*.{md,mdc}", "foo.md"));
        assert!(matches("*.{md,mdc}", "foo.mdc"));
        assert!(!matches("*.{md,mdc}", "foo.txt"));
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        assert!(matches("*.{md", "foo.{md"));
        assert!(!matches("*.{md", "foo.md"));
    }

    #[test]
    fn test_alternatives_may_contain_wildcards() {
        assert!(matches("{docs,notes}/*.md", "docs/a.md"));
        assert!(matches("{docs,notes}/*.md", "notes/b.md"));
        assert!(!matches("{docs,notes}/*.md", "src/a.md"));
    }

    #[test]
    fn test_regex_metacharacters_match_literally() {
        assert!(matches("a+b.md", "a+b.md"));
        assert!(!matches("a+b.md", "aab.md"));
        assert!(matches("notes(old)/*.md", "notes(old)/x.md"));
        assert!(!matches("a.md", "axmd"));
    }

    #[test]
    fn test_compilation_is_deterministic() {
        for path in ["docs/a.md", "docs/a/b.md", "other.txt"] {
            let first = GlobPattern::compile("docs/**/*.{md,mdc}").matches(path);
            let second = GlobPattern::compile("docs/**/*.{md,mdc}").matches(path);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_split_patterns_trims_and_drops_empty() {
        assert_eq!(split_patterns("a/*.md , b/*.md"), vec!["a/*.md", "b/*.md"]);
        assert_eq!(split_patterns("a/*.md,"), vec!["a/*.md"]);
        assert!(split_patterns("").is_empty());
        assert!(split_patterns("  ,  ").is_empty());
    }

    #[test]
    fn test_split_patterns_keeps_brace_groups_intact() {
        let pieces = split_patterns("docs/**/*.{md,mdc},src/*.js");
        assert_eq!(pieces, vec!["docs/**/*.{md,mdc}", "src/*.js"]);
    }

    #[test]
    fn test_pattern_set_matches_any() {
        let set = PatternSet::parse("docs/*.md,notes/*.md");
        assert!(set.matches("docs/a.md"));
        assert!(set.matches("notes/b.md"));
        assert!(!set.matches("src/c.md"));
        assert!(!set.is_empty());
        assert!(PatternSet::parse("  ").is_empty());
    }
}
