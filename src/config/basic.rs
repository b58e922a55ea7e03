use serde::{Deserialize, Serialize};

/// Basic (core) configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Origin prefixed to generated share links (`<origin>/event/<token>`).
    /// TOML: `basic.share_origin`. Default: `http://localhost:5173`.
    #[serde(default = "default_share_origin")]
    pub share_origin: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            loglevel: default_loglevel(),
            share_origin: default_share_origin(),
        }
    }
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_share_origin() -> String {
    "http://localhost:5173".to_string()
}
