//! MDX document helpers.
//!
//! Regex-based front matter extraction and heuristic tag repair. These
//! deliberately stop short of a real MDX/JSX parser: both live behind
//! narrow interfaces so a structured parser can replace them later
//! without touching callers.

pub mod frontmatter;
pub mod tags;

pub use frontmatter::extract_field;
pub use tags::{RepairStats, TagPair, repair_tag_balance};
