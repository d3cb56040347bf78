//! Navigation manifest model and restructuring passes.

pub mod manifest;
pub mod normalize;
pub mod sort;

pub use manifest::{Group, GroupTarget, Manifest, NestedGroup, PageEntry};
pub use normalize::{NormalizeOutcome, normalize_pages};
pub use sort::sort_groups_by_label;
