//! Lookup commands: `rpc`, `denom`, `helper`, `list` and `list --tier`.
//!
//! Each command renders to a string so the output can be checked without
//! capturing stdout.

use ledger_registry::{
    Chain, ChainRegistry, LedgerHelper, LedgerHelperOps, LedgerType, RpcTier,
};
use serde_json::{Map, Value, json};

/// Render the `rpc` command.
pub fn rpc(registry: &ChainRegistry, chain: Chain, public: bool) -> String {
    let tier = if public {
        RpcTier::Public
    } else {
        RpcTier::Default
    };
    registry.rpc(tier, chain).to_owned()
}

/// Render the `denom` command.
pub fn denom(chain: Chain) -> String {
    ChainRegistry::currency_denom(chain).to_owned()
}

/// Render the `helper` command as JSON.
///
/// A ledger type without `--rpc` is bound to the default RPC of the first
/// chain it serves.
pub fn helper(
    registry: &ChainRegistry,
    chain: Option<Chain>,
    ledger: Option<LedgerType>,
    rpc: Option<String>,
) -> String {
    let helper = match (chain, ledger) {
        (Some(chain), _) => {
            let rpc = rpc.unwrap_or_else(|| registry.default_rpc(chain).to_owned());
            ChainRegistry::ledger_helper_by_chain(rpc, chain)
        }
        (None, ledger) => {
            let ledger = ledger.unwrap_or(LedgerType::Ethereum);
            let rpc = rpc.unwrap_or_else(|| {
                let chain = Chain::ALL
                    .into_iter()
                    .find(|chain| ChainRegistry::ledger_type(*chain) == ledger)
                    .unwrap_or(Chain::Ethereum);
                registry.default_rpc(chain).to_owned()
            });
            ChainRegistry::ledger_helper_by_ledger(rpc, ledger)
        }
    };
    format!("{:#}", helper_json(&helper))
}

fn helper_json(helper: &LedgerHelper) -> Value {
    json!({
        "ledger_type": helper.ledger_type(),
        "rpc": helper.rpc(),
    })
}

/// Render `list --tier` as a JSON object of the tier's configured entries.
///
/// Chains without an entry in the tier are omitted, not resolved.
pub fn table(registry: &ChainRegistry, tier: RpcTier) -> String {
    let entries: Map<String, Value> = registry
        .rpc_table(tier)
        .map(|(chain, url)| (chain.to_string(), Value::from(url)))
        .collect();
    format!("{:#}", Value::Object(entries))
}

/// Render the `list` command as a JSON array, one object per chain.
pub fn list(registry: &ChainRegistry) -> String {
    let rows: Vec<Value> = Chain::ALL
        .into_iter()
        .map(|chain| {
            json!({
                "chain": chain,
                "ledger_type": ChainRegistry::ledger_type(chain),
                "denom": ChainRegistry::currency_denom(chain),
                "default_rpc": registry.default_rpc(chain),
                "public_rpc": registry.public_rpc(chain),
            })
        })
        .collect();
    format!("{:#}", Value::Array(rows))
}

#[cfg(test)]
mod tests {
    use ledger_registry::RpcConfig;

    use super::*;

    #[test]
    fn rpc_selects_tier() {
        let config = RpcConfig::from_lookup(|key| {
            (key == "SOLANA_RPC").then(|| "https://sol.private".to_owned())
        });
        let registry = ChainRegistry::new(config);
        assert_eq!(rpc(&registry, Chain::Solana, false), "https://sol.private");
        assert_eq!(rpc(&registry, Chain::Local, true), "https://ethereum.publicnode.com");
    }

    #[test]
    fn helper_for_ledger_uses_first_served_chain() {
        let registry = ChainRegistry::default();
        let out: Value =
            serde_json::from_str(&helper(&registry, None, Some(LedgerType::Solana), None))
                .expect("json");
        assert_eq!(out["ledger_type"], "solana");
        assert_eq!(out["rpc"], "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn helper_for_chain_keeps_explicit_rpc() {
        let registry = ChainRegistry::default();
        let out: Value = serde_json::from_str(&helper(
            &registry,
            Some(Chain::Mode),
            None,
            Some("http://mode.local".to_owned()),
        ))
        .expect("json");
        assert_eq!(out["ledger_type"], "ethereum");
        assert_eq!(out["rpc"], "http://mode.local");
    }

    #[test]
    fn table_omits_untabled_chains() {
        let out: Value =
            serde_json::from_str(&table(&ChainRegistry::default(), RpcTier::Public)).expect("json");
        let entries = out.as_object().expect("object");
        assert_eq!(entries["gnosis"], "https://gnosis-rpc.publicnode.com");
        assert!(!entries.contains_key("local"));
        assert!(!entries.contains_key("goerli"));
    }

    #[test]
    fn list_covers_every_chain() {
        let out: Value = serde_json::from_str(&list(&ChainRegistry::default())).expect("json");
        let rows = out.as_array().expect("array");
        assert_eq!(rows.len(), Chain::ALL.len());
        let goerli = rows
            .iter()
            .find(|row| row["chain"] == "goerli")
            .expect("goerli row");
        assert_eq!(goerli["denom"], "Wei");
        assert_eq!(goerli["default_rpc"], "https://ethereum.publicnode.com");
    }
}
