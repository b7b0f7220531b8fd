//! Unified error types for the ledger registry.
//!
//! Registry lookups are total and never produce an [`Error`]; only the
//! edges around them can fail (loading a configuration file, resolving a
//! `$VAR` reference, or turning a helper's RPC string into a URL).

use thiserror::Error;

/// Top-level error type for the ledger registry.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Configuration error with an underlying cause.
    #[error("config: {context}: {source}")]
    ConfigWith {
        /// What was being attempted.
        context: String,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A ledger helper's RPC endpoint is not a valid URL.
    #[error("endpoint '{rpc}': {source}")]
    Endpoint {
        /// The RPC value the helper was constructed with.
        rpc: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// Creates an [`Error::Config`] from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an [`Error::ConfigWith`] from a context message and a cause.
    pub fn config_with(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigWith {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Creates an [`Error::Endpoint`] for the given RPC string.
    pub fn endpoint_with(rpc: impl Into<String>, source: url::ParseError) -> Self {
        Self::Endpoint {
            rpc: rpc.into(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
