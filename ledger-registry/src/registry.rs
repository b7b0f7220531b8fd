//! Chain registry: RPC endpoints, denominations, and helper selection.
//!
//! Every lookup is total. Chains missing from a table resolve to the
//! Ethereum entry (or the Ethereum-compatible helper, or `"Wei"`).

use crate::chain::{
    Chain, ETHEREUM_DEFAULT_RPC, ETHEREUM_PUBLIC_RPC, LedgerHelper, LedgerType, RpcConfig,
    RpcTier,
};

/// Denomination used when a chain has no entry.
pub const DEFAULT_CURRENCY_DENOM: &str = "Wei";

/// Smallest-unit name of the native currency, if `chain` is tabled.
const fn currency_denom_entry(chain: Chain) -> Option<&'static str> {
    match chain {
        Chain::Ethereum | Chain::Local | Chain::Base | Chain::Optimistic | Chain::Mode => {
            Some("Wei")
        }
        Chain::Gnosis => Some("xDai"),
        Chain::Solana => Some("Lamp"),
        Chain::Goerli => None,
    }
}

/// Helper family responsible for `chain`, if tabled.
const fn chain_helper_entry(chain: Chain) -> Option<LedgerType> {
    match chain {
        Chain::Ethereum
        | Chain::Gnosis
        | Chain::Local
        | Chain::Base
        | Chain::Optimistic
        | Chain::Mode => Some(LedgerType::Ethereum),
        Chain::Solana => Some(LedgerType::Solana),
        Chain::Goerli => None,
    }
}

/// Read-only lookup surface over one [`RpcConfig`].
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    config: RpcConfig,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new(RpcConfig::builtin())
    }
}

impl ChainRegistry {
    /// Creates a registry over the given endpoint tables.
    #[must_use]
    pub const fn new(config: RpcConfig) -> Self {
        Self { config }
    }

    /// Default RPC for `chain`, or the Ethereum default RPC if untabled.
    #[must_use]
    pub fn default_rpc(&self, chain: Chain) -> &str {
        self.rpc(RpcTier::Default, chain)
    }

    /// Public RPC for `chain`, or the Ethereum public RPC if untabled.
    #[must_use]
    pub fn public_rpc(&self, chain: Chain) -> &str {
        self.rpc(RpcTier::Public, chain)
    }

    /// RPC for `chain` in `tier`, falling back to the Ethereum entry.
    #[must_use]
    pub fn rpc(&self, tier: RpcTier, chain: Chain) -> &str {
        self.config.get(tier, chain).unwrap_or_else(|| {
            tracing::debug!(%chain, %tier, "no RPC entry, using Ethereum");
            self.config
                .get(tier, Chain::Ethereum)
                .unwrap_or(match tier {
                    RpcTier::Public => ETHEREUM_PUBLIC_RPC,
                    RpcTier::Default => ETHEREUM_DEFAULT_RPC,
                })
        })
    }

    /// Configured entries of `tier`, ordered by chain.
    pub fn rpc_table(&self, tier: RpcTier) -> impl Iterator<Item = (Chain, &str)> {
        self.config.entries(tier)
    }

    /// Ledger type whose helper serves `chain`; Ethereum if untabled.
    #[must_use]
    pub fn ledger_type(chain: Chain) -> LedgerType {
        chain_helper_entry(chain).unwrap_or(LedgerType::Ethereum)
    }

    /// Builds the helper for `chain`, bound to exactly `rpc`.
    #[must_use]
    pub fn ledger_helper_by_chain(rpc: impl Into<String>, chain: Chain) -> LedgerHelper {
        LedgerHelper::new(Self::ledger_type(chain), rpc)
    }

    /// Builds the helper for `ledger_type`, bound to exactly `rpc`.
    #[must_use]
    pub fn ledger_helper_by_ledger(rpc: impl Into<String>, ledger_type: LedgerType) -> LedgerHelper {
        LedgerHelper::new(ledger_type, rpc)
    }

    /// Builds the helper for `chain`, bound to its default RPC.
    #[must_use]
    pub fn default_ledger_helper(&self, chain: Chain) -> LedgerHelper {
        Self::ledger_helper_by_chain(self.default_rpc(chain), chain)
    }

    /// Smallest-unit denomination for `chain`, `"Wei"` if untabled.
    #[must_use]
    pub const fn currency_denom(chain: Chain) -> &'static str {
        match currency_denom_entry(chain) {
            Some(denom) => denom,
            None => DEFAULT_CURRENCY_DENOM,
        }
    }
}
