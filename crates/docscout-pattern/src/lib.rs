//! Glob patterns for documentation discovery
//!
//! Compiles shell-style glob patterns (`*`, `**`, `?`, `{a,b}` alternation)
//! into anchored matchers over relative path strings, and derives the
//! wildcard-free prefix of a pattern used to scope fallback directory walks.
//!
//! Pattern compilation and matching are pure and total: no pattern string
//! causes a failure. Malformed syntax (an unterminated brace group) degrades
//! to literal-character matching instead of erroring.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod glob;
pub mod prefix;

pub use glob::{split_patterns, GlobPattern, PatternSet};
pub use prefix::static_prefix;
