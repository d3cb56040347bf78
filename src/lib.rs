//! `docsteward` - Maintenance toolkit for Mintlify documentation
//!
//! This library provides the building blocks for one-shot maintenance
//! passes over a documentation site: navigation manifest restructuring,
//! catalog page regeneration, and heuristic MDX repair.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod mdx;
pub mod nav;
pub mod observability;
pub mod pages;
