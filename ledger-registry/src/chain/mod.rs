//! Blockchain identifiers, RPC configuration, and ledger helpers.
//!
//! - [`config`] — RPC endpoint tables and their environment overrides.
//! - [`helper`] — [`LedgerHelper`] enum and the per-family helper types.

mod config;
mod helper;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::config::*;
pub use self::helper::*;

/// Supported blockchain networks.
///
/// The string form is the lowercase variant name (`"ethereum"`,
/// `"optimistic"`, ...) for serde, [`Display`](fmt::Display) and [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet.
    Ethereum,
    /// Gnosis chain.
    Gnosis,
    /// Goerli testnet. Retired; present in no registry table.
    Goerli,
    /// Solana mainnet-beta.
    Solana,
    /// Base mainnet.
    Base,
    /// OP mainnet.
    Optimistic,
    /// Mode mainnet.
    Mode,
    /// Local development node.
    Local,
}

impl Chain {
    /// Every chain, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Ethereum,
        Self::Gnosis,
        Self::Goerli,
        Self::Solana,
        Self::Base,
        Self::Optimistic,
        Self::Mode,
        Self::Local,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Gnosis => "gnosis",
            Self::Goerli => "goerli",
            Self::Solana => "solana",
            Self::Base => "base",
            Self::Optimistic => "optimistic",
            Self::Mode => "mode",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Chain`] or [`LedgerType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseIdentError {
    kind: &'static str,
    value: String,
}

impl FromStr for Chain {
    type Err = ParseIdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseIdentError {
                kind: "chain",
                value: s.to_owned(),
            })
    }
}

/// Signing and address scheme family shared across chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerType {
    /// secp256k1 keys, 20-byte hex addresses (all EVM chains).
    Ethereum,
    /// ed25519 keys, base58 addresses.
    Solana,
}

impl LedgerType {
    /// Every ledger type.
    pub const ALL: [Self; 2] = [Self::Ethereum, Self::Solana];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Solana => "solana",
        }
    }
}

impl fmt::Display for LedgerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerType {
    type Err = ParseIdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|ledger| ledger.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseIdentError {
                kind: "ledger type",
                value: s.to_owned(),
            })
    }
}
