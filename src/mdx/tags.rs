//! Heuristic tag-balance repair for MDX documents.
//!
//! Line-based accounting of paired markers (`<details>`, `<Steps>`):
//! unclosed openers gain appended closers at end of document, and a
//! closer on its own line with no marker currently open is dropped as an
//! orphan. Best-effort cleanup, not a parser — markers inside code
//! samples can defeat it.

use std::sync::LazyLock;

use regex::Regex;

static TEXT_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```text[ \t]*$").expect("valid regex"));

static BARE_LT_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\d)").expect("valid regex"));

/// A paired marker tracked by the repair pass.
#[derive(Debug, Clone)]
pub struct TagPair {
    /// Short label used in reports ("details", "Steps").
    pub label: &'static str,
    /// Pattern matching an opener, attributes included.
    open: &'static Regex,
    /// Literal closing marker.
    close: &'static str,
}

static DETAILS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<details[^>]*>").expect("valid regex"));

static STEPS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Steps>").expect("valid regex"));

/// The marker pairs the site's MDX pages actually break.
#[must_use]
pub fn standard_pairs() -> Vec<TagPair> {
    vec![
        TagPair {
            label: "details",
            open: &*DETAILS_OPEN,
            close: "</details>",
        },
        TagPair {
            label: "Steps",
            open: &*STEPS_OPEN,
            close: "</Steps>",
        },
    ]
}

/// Counts of repairs applied to one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairStats {
    /// Closers appended at end of document.
    pub appended: usize,
    /// Orphan closer lines dropped.
    pub dropped: usize,
}

impl RepairStats {
    /// True when the document was left unchanged.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.appended == 0 && self.dropped == 0
    }
}

/// Opener/closer totals for one marker pair, for report-only runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBalance {
    /// Number of opener occurrences.
    pub openers: usize,
    /// Number of closer occurrences.
    pub closers: usize,
}

impl TagBalance {
    /// True when openers and closers pair off exactly.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.openers == self.closers
    }
}

/// Counts openers and closers for a pair without modifying anything.
#[must_use]
pub fn tag_balance(content: &str, pair: &TagPair) -> TagBalance {
    TagBalance {
        openers: pair.open.find_iter(content).count(),
        closers: content.matches(pair.close).count(),
    }
}

/// Repairs tag balance for the given marker pairs.
///
/// Returns the repaired document and the combined repair counts. Entry
/// order of unaffected lines is preserved; appended closers land at the
/// end of the document, one line each.
#[must_use]
pub fn repair_tag_balance(content: &str, pairs: &[TagPair]) -> (String, RepairStats) {
    let mut stats = RepairStats::default();
    let mut doc = content.to_string();

    for pair in pairs {
        let (repaired, pair_stats) = repair_pair(&doc, pair);
        doc = repaired;
        stats.appended += pair_stats.appended;
        stats.dropped += pair_stats.dropped;
    }

    (doc, stats)
}

/// Single-pair repair pass.
///
/// Lines keep their original terminators, so a document that needs no
/// repair comes back byte-identical, CRLF endings included.
fn repair_pair(content: &str, pair: &TagPair) -> (String, RepairStats) {
    let mut stats = RepairStats::default();
    let mut depth: usize = 0;
    let mut out: Vec<&str> = Vec::new();

    for line in content.split_inclusive('\n') {
        let opens = pair.open.find_iter(line).count();
        let closes = line.matches(pair.close).count();

        // An orphan: a lone closer line while nothing is open.
        if opens == 0 && closes > depth && line.trim() == pair.close {
            stats.dropped += closes;
            continue;
        }

        depth = (depth + opens).saturating_sub(closes);
        out.push(line);
    }

    let mut doc = out.concat();
    for _ in 0..depth {
        if !doc.is_empty() && !doc.ends_with('\n') {
            doc.push('\n');
            doc.push_str(pair.close);
        } else {
            doc.push_str(pair.close);
            doc.push('\n');
        }
        stats.appended += 1;
    }

    (doc, stats)
}

/// Normalizes stray ```` ```text ```` markers to bare fence closers.
///
/// These show up where a closing fence was written with a language tag
/// by mistake, which breaks the renderer's block nesting.
#[must_use]
pub fn normalize_text_fences(content: &str) -> String {
    TEXT_FENCE.replace_all(content, "```").into_owned()
}

/// Escapes a bare `<` directly followed by a digit as `&lt;`.
///
/// `<1` is invalid JSX and aborts the page render.
#[must_use]
pub fn escape_bare_lt_digit(content: &str) -> String {
    BARE_LT_DIGIT.replace_all(content, "&lt;$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_pair() -> TagPair {
        standard_pairs().into_iter().next().unwrap()
    }

    #[test]
    fn test_balanced_document_untouched() {
        let doc = "<details>\nbody\n</details>\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(repaired, doc);
        assert!(stats.is_clean());
    }

    #[test]
    fn test_missing_closer_appended_at_end() {
        let doc = "<details>\none\n</details>\n<details>\ntwo\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.appended, 1);
        assert_eq!(stats.dropped, 0);
        assert!(repaired.trim_end().ends_with("</details>"));
        assert_eq!(repaired.matches("</details>").count(), 2);
    }

    #[test]
    fn test_balanced_crlf_document_untouched() {
        let doc = "<details>\r\nbody\r\n</details>\r\n\r\ntail\r\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(repaired, doc);
        assert!(stats.is_clean());
    }

    #[test]
    fn test_crlf_orphan_closer_dropped_keeps_endings() {
        let doc = "intro\r\n</details>\r\n<details>\r\nbody\r\n</details>\r\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.dropped, 1);
        assert_eq!(repaired, "intro\r\n<details>\r\nbody\r\n</details>\r\n");
    }

    #[test]
    fn test_orphan_closer_dropped() {
        let doc = "<details>\nbody\n</details>\n</details>\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.dropped, 1);
        assert_eq!(stats.appended, 0);
        assert_eq!(repaired.matches("</details>").count(), 1);
    }

    #[test]
    fn test_orphan_closer_before_any_opener() {
        let doc = "</details>\n<details>\nbody\n</details>\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.dropped, 1);
        assert!(!repaired.starts_with("</details>"));
        assert_eq!(repaired.matches("</details>").count(), 1);
    }

    #[test]
    fn test_opener_with_attributes_counts() {
        let doc = "<details open class=\"x\">\nbody\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.appended, 1);
        assert!(repaired.contains("</details>"));
    }

    #[test]
    fn test_steps_tracked_independently() {
        let doc = "<Steps>\n<details>\nbody\n</details>\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.appended, 1);
        assert!(repaired.trim_end().ends_with("</Steps>"));
    }

    #[test]
    fn test_nested_same_marker() {
        let doc = "<details>\n<details>\ninner\n</details>\n";
        let (repaired, stats) = repair_tag_balance(doc, &standard_pairs());
        assert_eq!(stats.appended, 1);
        assert_eq!(repaired.matches("</details>").count(), 2);
    }

    #[test]
    fn test_tag_balance_counts() {
        let doc = "<details>\n<details open>\n</details>\n";
        let balance = tag_balance(doc, &details_pair());
        assert_eq!(balance.openers, 2);
        assert_eq!(balance.closers, 1);
        assert!(!balance.is_balanced());
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let doc = "<details>\nbody\n";
        let (repaired, _) = repair_tag_balance(doc, &standard_pairs());
        assert!(repaired.ends_with('\n'));
    }

    #[test]
    fn test_normalize_text_fences() {
        let doc = "```bash\necho hi\n```text\n";
        assert_eq!(normalize_text_fences(doc), "```bash\necho hi\n```\n");
    }

    #[test]
    fn test_text_fence_with_trailing_content_kept() {
        let doc = "```text file=example\nbody\n```\n";
        assert_eq!(normalize_text_fences(doc), doc);
    }

    #[test]
    fn test_escape_bare_lt_digit() {
        assert_eq!(
            escape_bare_lt_digit("latency <1 second"),
            "latency &lt;1 second"
        );
        assert_eq!(escape_bare_lt_digit("<details>"), "<details>");
    }
}
