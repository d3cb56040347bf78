//! Front matter field extraction for MDX pages.
//!
//! Pattern-matches key/value lines inside the leading `---` fence. This
//! is not a YAML parser: multiline scalars and nested mappings are out
//! of scope, matching how the site's pages actually declare `title` and
//! `description`.

use regex::Regex;

/// Returns the front matter block of a document, without the fences.
///
/// The document must open with a `---` line; the block runs to the next
/// line starting with `---`. Returns `None` when either fence is absent.
#[must_use]
pub fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    Some(&rest[..=end])
}

/// Extracts a single front matter field by key.
///
/// Prefers a double-quoted value (`title: "Arbitrum One"`), falling back
/// to the rest of the line for unquoted values. Absence of the fence or
/// the key is non-fatal and yields `None`.
#[must_use]
pub fn extract_field(content: &str, key: &str) -> Option<String> {
    let block = frontmatter_block(content)?;

    let quoted = Regex::new(&format!(
        r#"(?m)^\s*{}:\s*"([^"]+)""#,
        regex::escape(key)
    ))
    .ok()?;
    if let Some(caps) = quoted.captures(block) {
        return Some(caps[1].to_string());
    }

    let bare = Regex::new(&format!(r"(?m)^\s*{}:\s*(\S.*)$", regex::escape(key))).ok()?;
    bare.captures(block)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}
