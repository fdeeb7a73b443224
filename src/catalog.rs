//! Static network catalog
//!
//! Maps (chain, network) pairs to the base URLs of known RPC providers.
//! The table is bundled as a JSON asset so it can be edited and versioned
//! separately from the generator logic; it is parsed once on first use and
//! never mutated.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One (chain, network) record in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkEntry {
    /// Chain name (e.g. "ethereum")
    pub chain: String,
    /// Network name (e.g. "mainnet", "sepolia")
    pub network: String,
    /// Numeric chain ID
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    /// Known provider base URLs, keyed by provider type
    pub providers: BTreeMap<String, String>,
}

static NETWORKS_JSON: &str = include_str!("../data/networks.json");

static NETWORKS: LazyLock<Vec<NetworkEntry>> = LazyLock::new(|| {
    serde_json::from_str(NETWORKS_JSON).expect("bundled networks.json must be valid")
});

/// All known (chain, network) records, in catalog order
pub fn network_entries() -> &'static [NetworkEntry] {
    &NETWORKS
}

/// Distinct chain names accepted by the generator, in catalog order
pub fn chain_choices() -> Vec<String> {
    distinct(network_entries().iter().map(|e| e.chain.as_str()))
}

/// Distinct network names accepted by the generator, in catalog order
pub fn network_choices() -> Vec<String> {
    distinct(network_entries().iter().map(|e| e.network.as_str()))
}

/// Collect distinct values preserving first-occurrence order
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
