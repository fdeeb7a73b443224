//! Resolver strategies that turn provider specs into a providers document
//!
//! Two strategies exist: [`generate_single`] keeps only the first matching
//! spec per chain/network, [`generate_multi`] keeps every matching spec.
//! Both iterate the catalog in table order and the specs in caller order,
//! so output is fully deterministic.

use crate::catalog::{self, NetworkEntry};
use crate::provider::{ProviderEntry, ProviderSpec};
use serde::Serialize;
use std::collections::HashMap;

/// One chain/network block in the output document
#[derive(Debug, Clone, Serialize)]
pub struct ChainEntry {
    /// Display name of the chain
    pub name: String,
    /// Network name
    pub network: String,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    /// Single-provider mode: the one selected provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderEntry>,
    /// Multi-provider mode: all matching providers, in spec order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<ProviderEntry>>,
}

/// Top-level output document
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersDocument {
    pub chains: Vec<ChainEntry>,
}

/// Emit one provider entry per matching spec, for every selected
/// chain/network. Repeated specs of the same type get ordinal suffixes.
pub fn generate_multi(
    specs: &[ProviderSpec],
    chains: &[String],
    networks: &[String],
) -> ProvidersDocument {
    let mut out = Vec::new();

    for entry in catalog::network_entries() {
        if !is_selected(entry, chains, networks) {
            continue;
        }

        // ordinal per provider type, scoped to this chain/network
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut providers = Vec::new();

        for spec in specs {
            let Some(url) = entry.providers.get(&spec.provider_type) else {
                continue;
            };

            let count = counts
                .entry(spec.provider_type.as_str())
                .and_modify(|c| *c += 1)
                .or_insert(1);
            let name = format!(
                "{}-{} {}",
                capitalize(&spec.provider_type),
                count,
                capitalize(&entry.chain)
            );

            providers.push(ProviderEntry::new(spec, name, url.clone(), entry.chain_id));
        }

        if providers.is_empty() {
            tracing::debug!(
                chain = %entry.chain,
                network = %entry.network,
                "no provider spec matched, omitting"
            );
            continue;
        }

        out.push(ChainEntry {
            name: capitalize(&entry.chain),
            network: entry.network.clone(),
            chain_id: entry.chain_id,
            provider: None,
            providers: Some(providers),
        });
    }

    ProvidersDocument { chains: out }
}

/// Emit at most one provider per selected chain/network: the first spec in
/// caller order whose type the catalog entry knows. Caller order is the
/// priority ranking.
pub fn generate_single(
    specs: &[ProviderSpec],
    chains: &[String],
    networks: &[String],
) -> ProvidersDocument {
    let mut out = Vec::new();

    for entry in catalog::network_entries() {
        if !is_selected(entry, chains, networks) {
            continue;
        }

        let Some((spec, url)) = specs
            .iter()
            .find_map(|s| entry.providers.get(&s.provider_type).map(|url| (s, url)))
        else {
            tracing::debug!(
                chain = %entry.chain,
                network = %entry.network,
                "no provider spec matched, omitting"
            );
            continue;
        };

        let name = capitalize(&spec.provider_type);
        let provider = ProviderEntry::new(spec, name, url.clone(), entry.chain_id);

        out.push(ChainEntry {
            name: capitalize(&entry.chain),
            network: entry.network.clone(),
            chain_id: entry.chain_id,
            provider: Some(provider),
            providers: None,
        });
    }

    ProvidersDocument { chains: out }
}

fn is_selected(entry: &NetworkEntry, chains: &[String], networks: &[String]) -> bool {
    chains.iter().any(|c| *c == entry.chain) && networks.iter().any(|n| *n == entry.network)
}

/// Uppercase the first character, lowercase the rest
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
