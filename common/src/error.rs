//! # Discovery Error Taxonomy
//!
//! File-level failures abort the phase that hit them but never crash the
//! run. Transport failures live with the session layer; parse anomalies
//! degrade to "no match" where they occur and never surface here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("inventory file {path} could not be read: {source}")]
    InventoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot i/o failed: {source}")]
    Persistence {
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding failed: {source}")]
    Encoding {
        #[from]
        source: serde_json::Error,
    },
}

/// A value that should have been an IPv4 address, mask or prefix length
/// but was not. Never fatal: matching on anomalous input degrades to
/// "no match" at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAnomaly {
    #[error("'{0}' is not a dotted-quad IPv4 value")]
    Address(String),
    #[error("'{0}' is not a prefix length between 0 and 32")]
    Prefix(String),
}
