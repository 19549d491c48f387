//! Frontmatter description extraction
//!
//! A deliberately partial decoder for the metadata header at the top of a
//! documentation file. It recognizes exactly one field, `description`, in
//! four value encodings: inline scalar, quoted string, literal block (`|`)
//! and folded block (`>`). Everything else a full YAML parser would accept
//! (nested mappings, sequences, anchors, comments) is out of scope and
//! yields no value rather than a best-effort decode.
//!
//! Every function here is pure and total: no input errors, absence is the
//! only negative outcome.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod extract;

pub use extract::extract_description;
