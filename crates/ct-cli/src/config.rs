//! Configuration loading and management.

use std::path::{Path, PathBuf};

use ct_core::{ResolveOrder, TimerOptionsRecord};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Which reading wins when text is both a time and a duration.
    #[serde(default)]
    pub prefer: ResolveOrder,

    /// Options given to every parsed timer input.
    #[serde(default)]
    pub options: TimerOptionsRecord,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CT_*)
        figment = figment.merge(Env::prefixed("CT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for ct.
///
/// On Linux: `~/.config/ct`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ct"))
}
