//! CLI definitions and command implementations for the ledger registry.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ledger_registry::{
    Chain, ChainRegistry, Error, LedgerType, RpcConfig, RpcTier, load_config,
};

pub mod init;
pub mod query;

/// Ledger registry — RPC endpoints, denominations and helpers per chain.
#[derive(Debug, Parser)]
#[command(name = "ledger-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML file layered over environment overrides.
    #[arg(short, long, global = true, env = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "ledger-registry.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the RPC endpoint of a chain.
    Rpc {
        /// Chain name (e.g. `gnosis`).
        chain: Chain,

        /// Use the public tier instead of the default tier.
        #[arg(long, default_value_t = false)]
        public: bool,
    },

    /// Print the currency denomination of a chain.
    Denom {
        /// Chain name.
        chain: Chain,
    },

    /// Resolve the ledger helper for a chain or ledger type.
    Helper {
        /// Chain name.
        #[arg(required_unless_present = "ledger", conflicts_with = "ledger")]
        chain: Option<Chain>,

        /// Ledger type (`ethereum` or `solana`).
        #[arg(long)]
        ledger: Option<LedgerType>,

        /// RPC to bind the helper to; defaults to the chain's default RPC.
        #[arg(long)]
        rpc: Option<String>,
    },

    /// Print every chain with its endpoints, denomination and helper.
    List {
        /// Only print the configured entries of one RPC tier.
        #[arg(long)]
        tier: Option<RpcTier>,
    },
}

/// Build the registry from `config` if given, the environment otherwise.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded.
pub fn registry(config: Option<&Path>) -> Result<ChainRegistry, Error> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => RpcConfig::from_env(),
    };
    Ok(ChainRegistry::new(config))
}
