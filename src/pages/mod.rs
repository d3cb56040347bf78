//! Catalog page generation.
//!
//! Turns a flat per-network page into a nested `overview.mdx` +
//! `schema.mdx` pair: facts are parsed out of the existing page, then
//! re-emitted through per-chain-family templates.

pub mod extract;
pub mod templates;

use clap::ValueEnum;

/// Chain family a network belongs to.
///
/// Selects the catalog path segment, the SDK snippet, and the
/// quickstart links used when rendering pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChainFamily {
    /// EVM chains (Ethereum, Arbitrum, Base, ...).
    Evm,
    /// Substrate chains (Polkadot, Kusama, parachains).
    Substrate,
    /// Solana and SVM chains.
    Solana,
    /// Starknet.
    Starknet,
    /// Tron.
    Tron,
    /// Fuel.
    Fuel,
}

impl ChainFamily {
    /// Catalog path segment for this family.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Substrate => "substrate",
            Self::Solana => "solana",
            Self::Starknet => "starknet",
            Self::Tron => "tron",
            Self::Fuel => "fuel",
        }
    }
}

/// Per-network facts parsed from a flat catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkFacts {
    /// Directory slug.
    pub slug: String,
    /// Dataset identifier used in endpoint URLs.
    pub network_id: String,
    /// Numeric chain ID, when the page declares one.
    pub chain_id: Option<String>,
    /// Display name from the front matter title.
    pub name: String,
    /// Front matter description, carried into the generated pages.
    pub description: String,
    /// Portal availability.
    pub portal: bool,
    /// Real-time streaming support.
    pub realtime: bool,
    /// Trace data availability.
    pub traces: bool,
    /// State diff availability.
    pub state_diffs: bool,
}

/// One `###` section with a Markdown field table, lifted from the flat
/// page's "Available Data" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSection {
    /// Section heading ("Blocks", "Transactions", ...).
    pub title: String,
    /// The Markdown table, verbatim.
    pub table: String,
}
