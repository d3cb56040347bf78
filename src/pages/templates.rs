//! MDX templates for generated overview and schema pages.
//!
//! Each chain family carries its own SDK snippet and quickstart links;
//! the page skeleton is shared. Output is plain MDX assembled from
//! section strings, no templating engine involved.

use crate::pages::{ChainFamily, NetworkFacts, SchemaSection};

/// Per-family rendering profile.
struct FamilyProfile {
    processor: &'static str,
    import_line: &'static str,
    quickstart: &'static str,
    api_ref: &'static str,
}

impl ChainFamily {
    const fn profile(self) -> FamilyProfile {
        match self {
            Self::Evm => FamilyProfile {
                processor: "EvmBatchProcessor",
                import_line: "import { EvmBatchProcessor } from '@subsquid/evm-processor'",
                quickstart: "/en/sdk/squid-sdk/evm/quickstart",
                api_ref: "/api/evm/dataset-metadata",
            },
            Self::Substrate => FamilyProfile {
                processor: "SubstrateBatchProcessor",
                import_line:
                    "import { SubstrateBatchProcessor } from '@subsquid/substrate-processor'",
                quickstart: "/en/sdk/squid-sdk/substrate/quickstart",
                api_ref: "/en/subsquid-network/reference/substrate-api",
            },
            Self::Solana => FamilyProfile {
                processor: "SolanaDataSource",
                import_line: "import { SolanaDataSource } from '@subsquid/solana-stream'",
                quickstart: "/en/solana-indexing/how-to-start/cli-cheatsheet",
                api_ref: "/en/solana-indexing/network-api/solana-api",
            },
            Self::Starknet => FamilyProfile {
                processor: "StarknetDataSource",
                import_line: "import { StarknetDataSource } from '@subsquid/starknet-stream'",
                quickstart: "/en/sdk/squid-sdk/starknet/quickstart",
                api_ref: "/en/subsquid-network/reference/starknet-api",
            },
            Self::Tron => FamilyProfile {
                processor: "TronBatchProcessor",
                import_line: "import { TronBatchProcessor } from '@subsquid/tron-processor'",
                quickstart: "/en/tron-indexing/cli-cheatsheet",
                api_ref: "/en/tron-indexing/network-api/tron-api",
            },
            Self::Fuel => FamilyProfile {
                processor: "FuelDataSource",
                import_line: "import { FuelDataSource } from '@subsquid/fuel-stream'",
                quickstart: "/en/fuel-indexing/cli-cheatsheet",
                api_ref: "/en/fuel-indexing/network-api/fuel-api",
            },
        }
    }
}

/// Renders the overview page for a network.
#[must_use]
pub fn render_overview(facts: &NetworkFacts, family: ChainFamily) -> String {
    let profile = family.profile();
    let mut sections = Vec::new();

    sections.push("---".to_string());
    sections.push("title: \"Overview\"".to_string());
    sections.push(format!("description: \"{}\"", facts.description));
    sections.push("---".to_string());
    sections.push(String::new());

    sections.push("## Network Information".to_string());
    sections.push(String::new());
    sections.push(format!("- **Network ID**: `{}`", facts.network_id));
    if let Some(ref chain_id) = facts.chain_id {
        sections.push(format!("- **Chain ID**: `{chain_id}`"));
    }
    sections.push(format!(
        "- **Portal Status**: {}",
        availability(facts.portal)
    ));
    sections.push(format!(
        "- **Real-time Streaming**: {}",
        if facts.realtime {
            "\u{26a1} Yes"
        } else {
            "Not Available"
        }
    ));
    sections.push(format!(
        "- **State Diffs**: {}",
        availability(facts.state_diffs)
    ));
    sections.push(format!("- **Traces**: {}", availability(facts.traces)));
    sections.push(String::new());

    render_endpoints(&mut sections, facts, family, &profile);

    sections.push("## Quick Start".to_string());
    sections.push(String::new());
    sections.push(format!(
        "Get started indexing {} data in minutes:",
        facts.name
    ));
    sections.push(String::new());
    sections.push(format!(
        "<Card title=\"Quick Start\" icon=\"server\" href=\"{}\">",
        profile.quickstart
    ));
    sections.push("  Create a full-stack indexer with GraphQL API".to_string());
    sections.push("</Card>".to_string());
    sections.push(String::new());

    sections.push("## Schema Reference".to_string());
    sections.push(String::new());
    sections.push(format!(
        "<Card\n  title=\"View Schema\"\n  icon=\"database\"\n  href=\"/en/data/catalog/{}/{}/schema\"\n>",
        family.segment(),
        facts.network_id
    ));
    sections.push(format!(
        "  See complete field definitions for blocks, transactions, logs{}{}",
        if facts.traces { ", traces" } else { "" },
        if facts.state_diffs {
            ", and state diffs"
        } else {
            ""
        }
    ));
    sections.push("</Card>".to_string());
    sections.push(String::new());

    sections.push("## Related Resources".to_string());
    sections.push(String::new());
    sections.push(format!(
        "<Card title=\"API Reference\" icon=\"code\" href=\"{}\">",
        profile.api_ref
    ));
    sections.push("  Complete API documentation".to_string());
    sections.push("</Card>".to_string());

    let mut page = sections.join("\n");
    page.push('\n');
    page
}

/// Renders the endpoint section. EVM networks get Portal and legacy V2
/// tabs; the other families document the V2 gateway and SDK snippet.
fn render_endpoints(
    sections: &mut Vec<String>,
    facts: &NetworkFacts,
    family: ChainFamily,
    profile: &FamilyProfile,
) {
    sections.push("## Endpoints".to_string());
    sections.push(String::new());

    if family == ChainFamily::Evm {
        sections.push("<Tabs>".to_string());
        sections.push("<Tab title=\"Portal (Recommended)\">".to_string());
        sections.push("### Portal Endpoint".to_string());
        sections.push(String::new());
        sections.push("```".to_string());
        sections.push(format!(
            "https://portal.sqd.dev/datasets/{}",
            facts.network_id
        ));
        sections.push("```".to_string());
        sections.push(String::new());
        sections.push("</Tab>".to_string());
        sections.push(String::new());
        sections.push("<Tab title=\"V2 Archive (Legacy)\">".to_string());
        sections.push("### V2 Archive Endpoint".to_string());
        sections.push(String::new());
        sections.push("```".to_string());
        sections.push(format!(
            "https://v2.archive.subsquid.io/network/{}",
            facts.network_id
        ));
        sections.push("```".to_string());
        sections.push(String::new());
        sections.push("<Warning>".to_string());
        sections.push(
            "  **Legacy**: Rate limited at 50 req/10s per IP. Will be sunset soon.".to_string(),
        );
        sections.push("</Warning>".to_string());
        sections.push(String::new());
        sections.push("### Usage".to_string());
        sections.push(String::new());
        sections.push("```typescript".to_string());
        sections.push(profile.import_line.to_string());
        sections.push(String::new());
        sections.push(format!("const processor = new {}()", profile.processor));
        sections.push(format!(
            "  .setGateway(\"https://v2.archive.subsquid.io/network/{}\")",
            facts.network_id
        ));
        sections.push("  .setRpcEndpoint(\"<your_rpc_endpoint>\")".to_string());
        sections.push("  .setFinalityConfirmation(75)".to_string());
        sections.push("  .setBlockRange({ from: 0 });".to_string());
        sections.push("```".to_string());
        sections.push(String::new());
        sections.push("</Tab>".to_string());
        sections.push("</Tabs>".to_string());
    } else {
        sections.push("### Gateway".to_string());
        sections.push(String::new());
        sections.push("```".to_string());
        sections.push(format!(
            "https://v2.archive.subsquid.io/network/{}",
            facts.network_id
        ));
        sections.push("```".to_string());
        sections.push(String::new());
        sections.push("### Usage".to_string());
        sections.push(String::new());
        sections.push("```typescript".to_string());
        sections.push(profile.import_line.to_string());
        sections.push(String::new());
        sections.push(format!("const dataSource = new {}()", profile.processor));
        sections.push(format!(
            "  .setGateway(\"https://v2.archive.subsquid.io/network/{}\")",
            facts.network_id
        ));
        sections.push("  .setBlockRange({ from: 0 });".to_string());
        sections.push("```".to_string());
    }
    sections.push(String::new());
}

/// Renders the schema page for a network.
#[must_use]
pub fn render_schema(
    facts: &NetworkFacts,
    schema_sections: &[SchemaSection],
    family: ChainFamily,
) -> String {
    let mut sections = Vec::new();

    sections.push("---".to_string());
    sections.push("title: \"Schema\"".to_string());
    sections.push(format!(
        "description: \"Complete data schema and field reference for {}\"",
        facts.name
    ));
    sections.push("---".to_string());
    sections.push(String::new());

    sections.push(format!("# {} Data Schema", facts.name));
    sections.push(String::new());
    sections.push(format!(
        "{} datasets provide comprehensive on-chain data including blocks, transactions, and logs (events){}{}. All data is indexed and queryable through Portal or v2 archives.",
        facts.name,
        if facts.traces {
            ", traces (internal transactions)"
        } else {
            ""
        },
        if facts.state_diffs {
            ", and state changes"
        } else {
            ""
        }
    ));
    sections.push(String::new());

    sections.push("## Available Data Types".to_string());
    sections.push(String::new());
    sections.push("<AccordionGroup>".to_string());
    for schema in schema_sections {
        sections.push(format!("<Accordion title=\"{}\">", schema.title));
        sections.push(section_description(&schema.title));
        sections.push(String::new());
        sections.push(schema.table.clone());
        sections.push("</Accordion>".to_string());
        sections.push(String::new());
    }
    sections.push("</AccordionGroup>".to_string());
    sections.push(String::new());

    if family == ChainFamily::Evm {
        sections.push("## Usage Examples".to_string());
        sections.push(String::new());
        sections.push("For code examples showing how to query this data, see:".to_string());
        sections.push(String::new());
        sections.push("- [Query Logs Example](/en/sdk/portal-evm/examples/query-logs)".to_string());
        sections.push(
            "- [Query Transactions Example](/en/sdk/portal-evm/examples/query-transactions)"
                .to_string(),
        );
        if facts.traces {
            sections.push(
                "- [Query Traces Example](/en/sdk/portal-evm/examples/query-traces)".to_string(),
            );
        }
        if facts.state_diffs {
            sections.push(
                "- [State Diffs Example](/en/sdk/portal-evm/examples/state-diffs)".to_string(),
            );
        }
    }

    let mut page = sections.join("\n");
    while page.ends_with('\n') {
        page.pop();
    }
    page.push('\n');
    page
}

const fn availability(flag: bool) -> &'static str {
    if flag { "\u{2713} Available" } else { "Not Available" }
}

/// Prose blurb for a known schema section heading.
fn section_description(title: &str) -> String {
    match title {
        "Blocks" => "Block headers contain metadata about each block in the chain.".to_string(),
        "Transactions" => {
            "Transaction data includes all executed transactions with their execution details."
                .to_string()
        }
        "Logs" => "Event logs emitted by smart contracts during transaction execution.".to_string(),
        "Traces" => {
            "Internal transactions and call traces showing execution flow within transactions."
                .to_string()
        }
        "State Diffs" => {
            "State changes tracking modifications to account balances, storage, and code."
                .to_string()
        }
        other => format!("Data fields for {}.", other.to_lowercase()),
    }
}
