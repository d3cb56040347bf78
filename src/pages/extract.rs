//! Fact and schema extraction from flat catalog pages.
//!
//! Pattern matching against the page conventions the site actually
//! uses (front matter, "Network ID: `...`" bullets, field tables under
//! "## Available Data"). Absent facts degrade to defaults rather than
//! erroring; only a missing title makes a page unusable.

use std::sync::LazyLock;

use regex::Regex;

use crate::mdx::frontmatter::extract_field;
use crate::pages::{NetworkFacts, SchemaSection};

static NETWORK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Network ID[:\s]+`([^`]+)`").expect("valid regex"));

static CHAIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Chain ID[:\s]+`?(\d+)`?").expect("valid regex"));

static SCHEMA_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"### ([^\n]+)\n\n(\|[^\n]+\n\|[^\n]+\n(?:\|[^\n]+\n)*)").expect("valid regex")
});

/// Parses network facts out of a flat catalog page.
///
/// Returns `None` when the page has no front matter title — without a
/// display name there is nothing useful to generate.
#[must_use]
pub fn extract_network_facts(content: &str, slug: &str) -> Option<NetworkFacts> {
    let name = extract_field(content, "title")?;
    let description = extract_field(content, "description").unwrap_or_default();

    let network_id = NETWORK_ID
        .captures(content)
        .map_or_else(|| slug.to_string(), |caps| caps[1].to_string());

    let chain_id = CHAIN_ID.captures(content).map(|caps| caps[1].to_string());

    Some(NetworkFacts {
        slug: slug.to_string(),
        network_id,
        chain_id,
        name,
        description,
        portal: content.contains("Portal Status") && content.contains("Available"),
        realtime: content.contains("Real-time Streaming")
            && (content.contains("Yes") || content.contains('\u{26a1}')),
        traces: content.contains("Traces")
            && (content.contains("Available") || content.contains('\u{2713}')),
        state_diffs: content.contains("State Diffs")
            && (content.contains("Available") || content.contains('\u{2713}')),
    })
}

/// Lifts the `###`-headed field tables out of "## Available Data".
///
/// Sections after "## Related Resources" are ignored. Pages without an
/// "Available Data" heading yield an empty list.
#[must_use]
pub fn extract_schema_sections(content: &str) -> Vec<SchemaSection> {
    let Some((_, data_section)) = content.split_once("## Available Data") else {
        return Vec::new();
    };
    let data_section = data_section
        .split("## Related Resources")
        .next()
        .unwrap_or(data_section);

    SCHEMA_SECTION
        .captures_iter(data_section)
        .map(|caps| SchemaSection {
            title: caps[1].trim().to_string(),
            table: caps[2].trim().to_string(),
        })
        .collect()
}
