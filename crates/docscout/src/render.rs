//! Output block rendering
//!
//! Serializes the collected entries as a single `<project_docs>` element:
//! an attribution line, a fixed instructional passage, then one `<doc>`
//! child per file in sorted path order. Text content escapes `&`, `<`, `>`
//! and attribute values additionally escape `"`.

/// Attribution line placed directly under the root element.
const ATTRIBUTION: &str = "Documentation index generated by docscout.";

/// Fixed instructional passage shown to the consuming session.
const INSTRUCTIONS: &str = "Each entry below names a documentation file and its \
author-provided description. When a task touches an area one of these files \
covers, read that file before making changes.";

/// One discovered documentation file, ready for rendering.
#[derive(Debug, Clone)]
pub struct DocEntry {
    /// Root-relative path with `/` separators.
    pub path: String,
    /// Decoded frontmatter description, when present.
    pub description: Option<String>,
}

/// Render the block, or `None` when there are no entries: zero matches
/// produce no output at all, not an empty wrapper.
pub fn render_block(entries: &[DocEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut out = String::from("<project_docs>\n");
    out.push_str(ATTRIBUTION);
    out.push('\n');
    out.push_str(INSTRUCTIONS);
    out.push('\n');

    for entry in entries {
        let path = escape_attr(&entry.path);
        match &entry.description {
            Some(description) => {
                out.push_str(&format!(
                    "<doc path=\"{}\">{}</doc>\n",
                    path,
                    escape_text(description)
                ));
            }
            None => out.push_str(&format!("<doc path=\"{path}\"/>\n")),
        }
    }

    out.push_str("</project_docs>");
    Some(out)
}

/// Escape text content. Ampersand goes first so the references produced by
/// the other substitutions are not escaped again.
fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value: text escaping plus `"`.
fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
