//! rpc-providers-gen - providers.json configuration generator
//!
//! A Rust library and CLI that turns a list of RPC provider credentials into
//! a structured configuration document: for each selected chain/network it
//! lists which provider endpoint(s) to use and how to authenticate against
//! them. Purely a data transformation, it never talks to the providers it
//! describes.
//!
//! # Example
//!
//! ```rust
//! use rpc_providers_gen::{generate_multi, ProviderSpec};
//!
//! let specs: Vec<ProviderSpec> = vec!["infura:TOKEN".parse().unwrap()];
//! let doc = generate_multi(
//!     &specs,
//!     &["ethereum".to_string()],
//!     &["mainnet".to_string()],
//! );
//!
//! assert_eq!(doc.chains.len(), 1);
//! assert_eq!(doc.chains[0].chain_id, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod generate;
pub mod output;
pub mod provider;

// Re-exports for convenience
pub use catalog::{chain_choices, network_choices, network_entries, NetworkEntry};
pub use error::{Error, OutputError, Result, SpecError};
pub use generate::{generate_multi, generate_single, ChainEntry, ProvidersDocument};
pub use output::write_document;
pub use provider::{AuthType, ProviderAuth, ProviderEntry, ProviderSpec};
