use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::Latency;

/// Global store defaults (used when a store-level value is unset).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreDefaults {
    /// Overrides every store's built-in delay.
    /// TOML: `stores.defaults.latency_ms`. Unset keeps each store's own delay.
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

/// Configuration for one entity store.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Artificial delay per operation, in milliseconds.
    /// TOML: `stores.<kind>.latency_ms`.
    /// Falls back to `stores.defaults.latency_ms`, then to the store's built-in delay.
    #[serde(default)]
    pub latency_ms: Option<u64>,

    /// JSON seed file replacing the built-in fixture.
    /// TOML: `stores.<kind>.seed_file`.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreResolvedConfig {
    pub latency: Latency,
    pub seed_file: Option<PathBuf>,
}

impl StoreConfig {
    pub fn resolve(&self, defaults: &StoreDefaults, builtin: Latency) -> StoreResolvedConfig {
        let latency = self
            .latency_ms
            .or(defaults.latency_ms)
            .map_or(builtin, Latency::from_millis);

        StoreResolvedConfig {
            latency,
            seed_file: self.seed_file.clone(),
        }
    }
}

/// All store configurations.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StoresConfig {
    #[serde(default)]
    pub defaults: StoreDefaults,

    #[serde(default)]
    pub events: StoreConfig,

    #[serde(default)]
    pub media: StoreConfig,

    #[serde(default)]
    pub themes: StoreConfig,
}
