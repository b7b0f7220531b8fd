//! Ledger helper types bound to an RPC endpoint.
//!
//! A helper is selected per [`LedgerType`] and owns the RPC string it was
//! built with. Construction never touches the network and never fails; an
//! unusable endpoint only surfaces when [`LedgerHelperOps::endpoint`] is
//! called.

use url::Url;

use super::LedgerType;
use crate::error::{Error, Result};

/// Construct a helper bound to an RPC endpoint.
pub trait FromRpc: Sized {
    /// Builds the helper. `rpc` is stored verbatim.
    fn from_rpc(rpc: impl Into<String>) -> Self;
}

/// Operations shared by every ledger helper.
pub trait LedgerHelperOps {
    /// Signing scheme this helper implements.
    fn ledger_type(&self) -> LedgerType;

    /// RPC endpoint exactly as supplied at construction.
    fn rpc(&self) -> &str;

    /// Whether `address` is well-formed for this ledger.
    fn is_valid_address(&self, address: &str) -> bool;

    /// Parses [`rpc`](Self::rpc) into a [`Url`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Endpoint`] if the RPC string is not a valid URL.
    fn endpoint(&self) -> Result<Url> {
        Url::parse(self.rpc()).map_err(|e| Error::endpoint_with(self.rpc(), e))
    }
}

/// Helper for Ethereum-compatible (EVM) chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ethereum {
    rpc: String,
}

impl FromRpc for Ethereum {
    fn from_rpc(rpc: impl Into<String>) -> Self {
        Self { rpc: rpc.into() }
    }
}

impl LedgerHelperOps for Ethereum {
    fn ledger_type(&self) -> LedgerType {
        LedgerType::Ethereum
    }

    fn rpc(&self) -> &str {
        &self.rpc
    }

    fn is_valid_address(&self, address: &str) -> bool {
        address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .filter(|digits| digits.len() == 40)
            .is_some_and(|digits| hex::decode(digits).is_ok())
    }
}

/// Helper for Solana.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solana {
    rpc: String,
}

impl FromRpc for Solana {
    fn from_rpc(rpc: impl Into<String>) -> Self {
        Self { rpc: rpc.into() }
    }
}

impl LedgerHelperOps for Solana {
    fn ledger_type(&self) -> LedgerType {
        LedgerType::Solana
    }

    fn rpc(&self) -> &str {
        &self.rpc
    }

    fn is_valid_address(&self, address: &str) -> bool {
        // ed25519 public key
        bs58::decode(address)
            .into_vec()
            .is_ok_and(|bytes| bytes.len() == 32)
    }
}

/// Unified ledger helper wrapping the per-family implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerHelper {
    /// Ethereum-compatible helper.
    Ethereum(Ethereum),
    /// Solana helper.
    Solana(Solana),
}

impl LedgerHelper {
    /// Builds the helper variant for `ledger_type`, bound to `rpc`.
    #[must_use]
    pub fn new(ledger_type: LedgerType, rpc: impl Into<String>) -> Self {
        match ledger_type {
            LedgerType::Ethereum => Self::Ethereum(Ethereum::from_rpc(rpc)),
            LedgerType::Solana => Self::Solana(Solana::from_rpc(rpc)),
        }
    }
}

impl LedgerHelperOps for LedgerHelper {
    fn ledger_type(&self) -> LedgerType {
        match self {
            Self::Ethereum(helper) => helper.ledger_type(),
            Self::Solana(helper) => helper.ledger_type(),
        }
    }

    fn rpc(&self) -> &str {
        match self {
            Self::Ethereum(helper) => helper.rpc(),
            Self::Solana(helper) => helper.rpc(),
        }
    }

    fn is_valid_address(&self, address: &str) -> bool {
        match self {
            Self::Ethereum(helper) => helper.is_valid_address(address),
            Self::Solana(helper) => helper.is_valid_address(address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_is_kept_verbatim() {
        let rpc = "  http://node:8545/path?key=abc ";
        let helper = LedgerHelper::new(LedgerType::Ethereum, rpc);
        assert_eq!(helper.rpc(), rpc);
    }

    #[test]
    fn new_selects_variant_by_ledger_type() {
        assert!(matches!(
            LedgerHelper::new(LedgerType::Solana, "https://api.mainnet-beta.solana.com"),
            LedgerHelper::Solana(_)
        ));
        assert!(matches!(
            LedgerHelper::new(LedgerType::Ethereum, "https://ethereum.publicnode.com"),
            LedgerHelper::Ethereum(_)
        ));
    }

    #[test]
    fn endpoint_reports_invalid_rpc_lazily() {
        let helper = Ethereum::from_rpc("not a url");
        let err = helper.endpoint().expect_err("invalid url");
        assert!(matches!(err, Error::Endpoint { ref rpc, .. } if rpc == "not a url"));

        let helper = Solana::from_rpc("https://api.mainnet-beta.solana.com");
        let url = helper.endpoint().expect("valid url");
        assert_eq!(url.host_str(), Some("api.mainnet-beta.solana.com"));
    }

    #[test]
    fn ethereum_address_validation() {
        let helper = Ethereum::from_rpc("http://127.0.0.1:8545");
        assert!(helper.is_valid_address("0x52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!helper.is_valid_address("52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!helper.is_valid_address("0x5290840009852788"));
        assert!(!helper.is_valid_address("0xZZ908400098527886E0F7030069857D2E4169EE7"));
    }

    #[test]
    fn solana_address_validation() {
        let helper = Solana::from_rpc("https://api.mainnet-beta.solana.com");
        assert!(helper.is_valid_address("11111111111111111111111111111111"));
        assert!(helper.is_valid_address("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));
        assert!(!helper.is_valid_address("0x52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!helper.is_valid_address("abc"));
    }
}
