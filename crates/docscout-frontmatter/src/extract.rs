//! The description-field state walk
//!
//! Stages: header-seek (find the delimited header at byte zero), field-seek
//! (find the first `description:` line), value-dispatch (pick one of the
//! four encodings), block-collect (gather indented lines for block scalars).

use tracing::trace;

/// The header must open with exactly these four characters at byte zero.
const HEADER_OPEN: &str = "---\n";
/// A newline followed by three dashes closes the header body.
const HEADER_CLOSE: &str = "\n---";
/// The one field this decoder interprets.
const FIELD: &str = "description:";

/// Extract the `description` value from a file's metadata header.
///
/// Returns `None` when the text has no header at position zero, the header
/// never closes, the field is missing, or its value decodes to the empty
/// string. Only the first `description:` line in the header is consulted;
/// later occurrences are ignored even when the first yields no value.
pub fn extract_description(text: &str) -> Option<String> {
    let body = header_body(text)?;
    let lines: Vec<&str> = body.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        if let Some(rest) = line.strip_prefix(FIELD) {
            return decode_value(rest, &lines[index + 1..]);
        }
    }
    trace!("header has no description field");
    None
}

/// The text between the opening marker and the first closing marker.
fn header_body(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(HEADER_OPEN)?;
    let end = rest.find(HEADER_CLOSE)?;
    Some(&rest[..end])
}

/// Dispatch on the first non-whitespace characters after the colon.
fn decode_value(raw: &str, following: &[&str]) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if value.starts_with('"') || value.starts_with('\'') {
        return non_empty(strip_quotes(value));
    }
    if let Some(join) = block_join(value) {
        return non_empty(collect_block(following, join));
    }
    // inline scalar, kept verbatim: embedded colons are not re-parsed
    non_empty(value.to_string())
}

/// Drop the opening quote and the final character. No escape processing
/// happens between them.
fn strip_quotes(value: &str) -> String {
    let mut inner: Vec<char> = value.chars().skip(1).collect();
    inner.pop();
    inner.into_iter().collect()
}

/// The joiner for a block-scalar indicator, or `None` when the value is not
/// exactly `|` or `>` with an optional `+`/`-` chomp indicator.
fn block_join(value: &str) -> Option<&'static str> {
    let mut chars = value.chars();
    let join = match chars.next() {
        Some('|') => "\n",
        Some('>') => " ",
        _ => return None,
    };
    match chars.next() {
        None => Some(join),
        Some('+' | '-') if chars.next().is_none() => Some(join),
        _ => None,
    }
}

/// Gather the block's member lines and join them.
///
/// A following line belongs to the block when it is entirely empty (kept as
/// an empty member) or starts with whitespace (its indentation is stripped).
/// Collection stops at the first unindented non-empty line. Trailing empty
/// members are discarded so trailing blank lines never become trailing
/// separators in the result.
fn collect_block(following: &[&str], join: &str) -> String {
    let mut members: Vec<&str> = Vec::new();
    for line in following {
        if line.is_empty() {
            members.push("");
        } else if line.starts_with(char::is_whitespace) {
            members.push(line.trim_start());
        } else {
            break;
        }
    }
    while members.last() == Some(&"") {
        members.pop();
    }
    members.join(join)
}

/// An empty decoded value is indistinguishable from a missing field.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
