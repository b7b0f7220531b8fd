//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`load_config`] — Reads a TOML file and layers it over the environment.
//! - [`parse_config`] — Same, from an in-memory string and a variable lookup.
//! - [`generate_default_config`] — Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! [rpc]
//! gnosis = "https://my.gnosis.node"
//! local = "$ANVIL_RPC"
//!
//! [public_rpc]
//! base = "${BASE_ARCHIVE_RPC}"
//! ```
//!
//! Precedence, highest first: file entry, environment override
//! (`GNOSIS_RPC`, `BASE_PUBLIC_RPC`, ...), hardcoded endpoint.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::chain::{Chain, RpcConfig, RpcTier, rpc_env_key};
use crate::error::{Error, Result};

/// Raw TOML document. Chain keys are parsed after deserialisation so
/// errors name the offending key.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    rpc: BTreeMap<String, String>,
    public_rpc: BTreeMap<String, String>,
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env<F>(value: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let var_name = value
        .strip_prefix("${")
        .and_then(|v| v.strip_suffix('}'))
        .or_else(|| {
            value
                .strip_prefix('$')
                .filter(|name| !name.is_empty())
                .filter(|name| name.chars().all(|c| c.is_alphanumeric() || c == '_'))
        });

    match var_name {
        Some(name) => lookup(name).ok_or_else(|| {
            Error::config(format!(
                "env var '{name}' not found (referenced as '{value}')"
            ))
        }),
        None => Ok(value.to_owned()),
    }
}

fn apply_table<F>(
    config: &mut RpcConfig,
    tier: RpcTier,
    table: BTreeMap<String, String>,
    lookup: &F,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    for (key, raw) in table {
        let chain: Chain = key
            .parse()
            .map_err(|e| Error::config_with(format!("[{}] key '{key}'", section(tier)), e))?;
        if rpc_env_key(chain, tier).is_none() {
            return Err(Error::config(format!(
                "[{}] chain '{chain}' has no {tier} RPC table entry",
                section(tier)
            )));
        }
        let url = resolve_env(&raw, lookup)?;
        if url.trim().is_empty() {
            tracing::debug!(%chain, %tier, "blank RPC in config file, ignored");
            continue;
        }
        tracing::debug!(%chain, %tier, "RPC override from config file");
        config.insert(tier, chain, url);
    }
    Ok(())
}

const fn section(tier: RpcTier) -> &'static str {
    match tier {
        RpcTier::Public => "public_rpc",
        RpcTier::Default => "rpc",
    }
}

/// Parse a TOML document and layer it over overrides from `lookup`.
///
/// `lookup` serves both the `<CHAIN>_RPC` overrides and `$VAR` references
/// inside the document.
///
/// # Errors
///
/// Returns an error if the document is not valid TOML, names an unknown
/// chain or a chain without an entry in that tier, or references an unset
/// variable.
pub fn parse_config<F>(content: &str, lookup: F) -> Result<RpcConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file: FileConfig =
        toml::from_str(content).map_err(|e| Error::config_with("failed to parse TOML", e))?;
    let mut config = RpcConfig::from_lookup(&lookup);
    apply_table(&mut config, RpcTier::Default, file.rpc, &lookup)?;
    apply_table(&mut config, RpcTier::Public, file.public_rpc, &lookup)?;
    Ok(config)
}

/// Load configuration from a TOML file at the given path, using the process
/// environment for overrides and `$VAR` references.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<RpcConfig> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    tracing::info!(path = %config_path.display(), "loading RPC configuration");
    parse_config(&content, |key| std::env::var(key).ok()).map_err(|e| {
        Error::config_with(format!("'{}'", config_path.display()), e)
    })
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    let mut config = String::from(
        r"# Ledger registry configuration
#
# Entries here win over environment overrides, which win over the
# hardcoded endpoints below. Values may be literal URLs or environment
# variable references: $VAR or ${VAR}.
",
    );

    for tier in [RpcTier::Default, RpcTier::Public] {
        config.push_str(&format!("\n[{}]\n", section(tier)));
        for (chain, url) in RpcConfig::builtin().entries(tier) {
            let key = rpc_env_key(chain, tier).unwrap_or_default();
            config.push_str(&format!("# {chain} = \"{url}\"  # env: {key}\n"));
        }
    }

    config
}
