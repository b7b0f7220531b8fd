//! RPC endpoint tables and their environment overrides.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Chain;

/// Hardcoded default RPC for Ethereum, also the fallback for untabled chains.
pub const ETHEREUM_DEFAULT_RPC: &str = "https://ethereum.publicnode.com";

/// Hardcoded public RPC for Ethereum, also the fallback for untabled chains.
pub const ETHEREUM_PUBLIC_RPC: &str = "https://ethereum.publicnode.com";

/// Which of the two endpoint tables a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcTier {
    /// Free, rate-limited community endpoints.
    Public,
    /// Preferred endpoints, possibly private.
    Default,
}

impl fmt::Display for RpcTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Default => "default",
        })
    }
}

impl FromStr for RpcTier {
    type Err = super::ParseIdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "default" => Ok(Self::Default),
            _ => Err(super::ParseIdentError {
                kind: "RPC tier",
                value: s.to_owned(),
            }),
        }
    }
}

/// One row of the builtin endpoint table.
struct RpcEntry {
    chain: Chain,
    default_key: &'static str,
    default_url: &'static str,
    /// `None` when the chain has no public endpoint.
    public: Option<(&'static str, &'static str)>,
}

// Goerli is retired and deliberately absent.
const RPC_ENTRIES: &[RpcEntry] = &[
    RpcEntry {
        chain: Chain::Ethereum,
        default_key: "ETHEREUM_RPC",
        default_url: ETHEREUM_DEFAULT_RPC,
        public: Some(("ETHEREUM_PUBLIC_RPC", ETHEREUM_PUBLIC_RPC)),
    },
    RpcEntry {
        chain: Chain::Gnosis,
        default_key: "GNOSIS_RPC",
        default_url: "https://rpc-gate.autonolas.tech/gnosis-rpc/",
        public: Some(("GNOSIS_PUBLIC_RPC", "https://gnosis-rpc.publicnode.com")),
    },
    RpcEntry {
        chain: Chain::Solana,
        default_key: "SOLANA_RPC",
        default_url: "https://api.mainnet-beta.solana.com",
        public: Some(("SOLANA_PUBLIC_RPC", "https://api.mainnet-beta.solana.com")),
    },
    RpcEntry {
        chain: Chain::Base,
        default_key: "BASE_RPC",
        default_url: "https://mainnet.base.org",
        public: Some(("BASE_PUBLIC_RPC", "https://mainnet.base.org")),
    },
    RpcEntry {
        chain: Chain::Optimistic,
        default_key: "OPTIMISM_RPC",
        default_url: "https://mainnet.optimism.io",
        public: Some(("OPTIMISM_PUBLIC_RPC", "https://mainnet.optimism.io")),
    },
    RpcEntry {
        chain: Chain::Mode,
        default_key: "MODE_RPC",
        default_url: "https://rpc.mode.network",
        public: Some(("MODE_PUBLIC_RPC", "https://rpc.mode.network")),
    },
    RpcEntry {
        chain: Chain::Local,
        default_key: "LOCAL_RPC",
        default_url: "http://127.0.0.1:8545",
        public: None,
    },
];

/// Environment key overriding the RPC of `chain` in `tier`, if the chain
/// is tabled in that tier.
#[must_use]
pub fn rpc_env_key(chain: Chain, tier: RpcTier) -> Option<&'static str> {
    let entry = RPC_ENTRIES.iter().find(|entry| entry.chain == chain)?;
    match tier {
        RpcTier::Default => Some(entry.default_key),
        RpcTier::Public => entry.public.map(|(key, _)| key),
    }
}

/// Resolved RPC endpoint tables.
///
/// Built once at startup and read-only afterwards. A chain with no entry in
/// a tier resolves to the Ethereum endpoint of that tier via
/// [`ChainRegistry`](crate::ChainRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    public: BTreeMap<Chain, String>,
    default: BTreeMap<Chain, String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RpcConfig {
    /// Tables holding only the hardcoded endpoints, ignoring the environment.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_lookup(|_| None)
    }

    /// Tables with overrides read from the process environment.
    ///
    /// The default tier reads `<CHAIN>_RPC`. The public tier reads
    /// `<CHAIN>_PUBLIC_RPC`, then `<CHAIN>_RPC`. Empty values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Tables with overrides supplied by `lookup` (key → value).
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty()).inspect(|_| {
                tracing::debug!(key, "RPC override found");
            })
        };

        let mut public = BTreeMap::new();
        let mut default = BTreeMap::new();
        for entry in RPC_ENTRIES {
            let default_url =
                resolve(entry.default_key).unwrap_or_else(|| entry.default_url.to_owned());
            if let Some((public_key, public_url)) = entry.public {
                let url = resolve(public_key)
                    .or_else(|| resolve(entry.default_key))
                    .unwrap_or_else(|| public_url.to_owned());
                public.insert(entry.chain, url);
            }
            default.insert(entry.chain, default_url);
        }

        Self { public, default }
    }

    /// Configured endpoint of `chain` in `tier`, without fallback.
    #[must_use]
    pub fn get(&self, tier: RpcTier, chain: Chain) -> Option<&str> {
        self.table(tier).get(&chain).map(String::as_str)
    }

    /// Configured entries of `tier`, ordered by chain.
    pub fn entries(&self, tier: RpcTier) -> impl Iterator<Item = (Chain, &str)> {
        self.table(tier)
            .iter()
            .map(|(chain, url)| (*chain, url.as_str()))
    }

    /// Replaces or adds one entry. Only used while the config is being built.
    pub(crate) fn insert(&mut self, tier: RpcTier, chain: Chain, url: String) {
        let table = match tier {
            RpcTier::Public => &mut self.public,
            RpcTier::Default => &mut self.default,
        };
        table.insert(chain, url);
    }

    const fn table(&self, tier: RpcTier) -> &BTreeMap<Chain, String> {
        match tier {
            RpcTier::Public => &self.public,
            RpcTier::Default => &self.default,
        }
    }
}
