// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Printer connection configuration.
//
// The host/address is owned by the embedding host's persisted settings and
// may change between operations, so both discovery and submission read it
// fresh every time through a `ConfigStore` rather than caching a snapshot.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Default printer host when nothing has been configured yet.
pub const DEFAULT_HOST: &str = "192.168.1.2";

/// Persistent printer connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Printer host or host:port, without scheme.
    pub host: String,
    /// Timeout for the reachability probe. `None` uses the transport default.
    pub probe_timeout_secs: Option<u64>,
    /// Timeout for the job upload. `None` uses the transport default.
    pub upload_timeout_secs: Option<u64>,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            probe_timeout_secs: None,
            upload_timeout_secs: None,
        }
    }
}

/// Source of the current printer connection settings.
///
/// Implementations must return a fresh value on every call — callers rely
/// on picking up host changes made between operations.
pub trait ConfigStore: Send + Sync {
    fn current(&self) -> PrinterConfig;
}

/// In-memory config store the host can update between operations.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<PrinterConfig>>,
}

impl SharedConfig {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replace the stored settings. Subsequent reads see the new value.
    pub fn set(&self, config: PrinterConfig) {
        *self.inner.write().expect("config lock poisoned") = config;
    }
}

impl ConfigStore for SharedConfig {
    fn current(&self) -> PrinterConfig {
        self.inner.read().expect("config lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_matches_constant() {
        assert_eq!(PrinterConfig::default().host, DEFAULT_HOST);
    }

    #[test]
    fn shared_config_reads_are_fresh() {
        let store = SharedConfig::default();
        assert_eq!(store.current().host, DEFAULT_HOST);

        store.set(PrinterConfig {
            host: "10.0.0.9:8080".into(),
            ..PrinterConfig::default()
        });
        assert_eq!(store.current().host, "10.0.0.9:8080");
    }
}
