//! Chain registry for RPC endpoints, currency denominations and ledger helpers.
//!
//! - [`Chain`] / [`LedgerType`] — supported networks and signing schemes.
//! - [`RpcConfig`] — default and public RPC tables, built once at startup
//!   from hardcoded endpoints, environment overrides and an optional TOML
//!   file ([`load_config`]).
//! - [`ChainRegistry`] — total lookups over an [`RpcConfig`]; unknown keys
//!   resolve to the Ethereum entry, the Ethereum-compatible helper, or
//!   `"Wei"`.
//!
//! ```
//! use ledger_registry::{Chain, ChainRegistry, LedgerHelper, LedgerHelperOps, RpcConfig};
//!
//! let registry = ChainRegistry::new(RpcConfig::builtin());
//! assert_eq!(registry.default_rpc(Chain::Local), "http://127.0.0.1:8545");
//! assert_eq!(ChainRegistry::currency_denom(Chain::Gnosis), "xDai");
//!
//! let helper = ChainRegistry::ledger_helper_by_chain("https://api.devnet.solana.com", Chain::Solana);
//! assert!(matches!(helper, LedgerHelper::Solana(_)));
//! assert_eq!(helper.rpc(), "https://api.devnet.solana.com");
//! ```

mod chain;
mod config;
mod error;
mod registry;

pub use chain::*;
pub use config::{generate_default_config, load_config, parse_config};
pub use error::{Error, Result};
pub use registry::{ChainRegistry, DEFAULT_CURRENCY_DENOM};
