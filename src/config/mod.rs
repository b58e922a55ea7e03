mod basic;
mod stores;

pub use basic::BasicConfig;
pub use stores::{StoreConfig, StoreDefaults, StoreResolvedConfig, StoresConfig};

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SnapshareError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging and share-link settings (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Per-store latency and seed overrides (see `stores` table in config.toml).
    #[serde(default)]
    pub stores: StoresConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults and a config TOML file.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `config.toml` if present.
    pub fn from_optional_toml() -> Result<Self, SnapshareError> {
        Self::figment().extract().map_err(|err| {
            SnapshareError::Config(format!(
                "failed to extract configuration (defaults + optional {DEFAULT_CONFIG_FILE}): {err}"
            ))
        })
    }

    /// Loads configuration from TOML text layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, SnapshareError> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(|err| SnapshareError::Config(err.to_string()))
    }

    pub fn events(&self) -> StoreResolvedConfig {
        self.stores
            .events
            .resolve(&self.stores.defaults, crate::stores::events::DEFAULT_LATENCY)
    }

    pub fn media(&self) -> StoreResolvedConfig {
        self.stores
            .media
            .resolve(&self.stores.defaults, crate::stores::media::DEFAULT_LATENCY)
    }

    pub fn themes(&self) -> StoreResolvedConfig {
        self.stores
            .themes
            .resolve(&self.stores.defaults, crate::stores::themes::DEFAULT_LATENCY)
    }

    /// Defaults with every store's delay forced to zero. Meant for tests.
    pub fn without_latency() -> Self {
        let mut cfg = Self::default();
        cfg.stores.defaults.latency_ms = Some(0);
        cfg
    }
}
