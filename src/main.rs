//! rpc-providers-gen CLI - providers.json configuration generator

use clap::builder::PossibleValuesParser;
use clap::Parser;
use rpc_providers_gen::{
    catalog, generate_multi, generate_single, write_document, ProviderSpec,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "rpc-providers-gen")]
#[command(
    version,
    about = "Generate providers.json configuration for EVM RPC provider endpoints"
)]
#[command(after_help = r#"EXAMPLES:
    # One entry per matching provider, with display ordinals
    rpc-providers-gen --providers infura:TOK1 grove:TOK2 \
                      --chains ethereum optimism --networks mainnet

    # First matching provider wins (caller order is the priority ranking)
    rpc-providers-gen --providers infura:TOK grove:TOK \
                      --chains ethereum --networks mainnet sepolia \
                      --single-provider -o providers.json

    # Basic-auth credentials (password may contain ':')
    rpc-providers-gen --providers nodefleet:login:password \
                      --chains base --networks mainnet
"#)]
struct Cli {
    /// Provider credentials in provider, provider:token or
    /// provider:login:password form
    #[arg(long, required = true, num_args = 1..)]
    providers: Vec<String>,

    /// Networks to generate configs for
    #[arg(
        long,
        required = true,
        num_args = 1..,
        value_parser = PossibleValuesParser::new(catalog::network_choices())
    )]
    networks: Vec<String>,

    /// Chains to generate configs for
    #[arg(
        long,
        required = true,
        num_args = 1..,
        value_parser = PossibleValuesParser::new(catalog::chain_choices())
    )]
    chains: Vec<String>,

    /// Output file path
    #[arg(short, long, default_value = "generated_providers.json")]
    output: PathBuf,

    /// Pick only the first matching provider per chain/network
    #[arg(long)]
    single_provider: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let specs = cli
        .providers
        .iter()
        .map(|s| s.parse::<ProviderSpec>())
        .collect::<Result<Vec<_>, _>>()?;

    let doc = if cli.single_provider {
        generate_single(&specs, &cli.chains, &cli.networks)
    } else {
        generate_multi(&specs, &cli.chains, &cli.networks)
    };

    tracing::info!(chains = doc.chains.len(), "resolved provider entries");

    write_document(&doc, &cli.output)?;

    println!("Successfully generated {}", cli.output.display());

    Ok(())
}
