//! Registry configuration.
//!
//! [`RegistryConfig`] is the config store a registry consults when a caller
//! resolves a capability without a hint: it maps capability names to the
//! variant that should be used by default.
//!
//! # Loading Priority
//!
//! 1. Explicit path argument
//! 2. `FACTORIA_CONFIG` environment variable
//! 3. XDG default: `~/.config/factoria/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables under the `FACTORIA` prefix are layered on top of
//! the file.
//!
//! ```toml
//! project_name = "my-app"
//!
//! [providers]
//! IMockProvider = "alt"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use confyg::{Confygery, env};
use factoria_core::{Capability, Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FACTORIA_CONFIG";

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Project name, used for diagnostics.
    pub project_name: String,

    /// Default variant per capability name.
    pub providers: BTreeMap<String, String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            project_name: "factoria".to_string(),
            providers: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("loading registry config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FACTORIA");
        env_opts.add_section("providers");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let mut config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;
        config.fold_env_keys();

        Ok(config)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config(format!("config parse: {e}")))
    }

    /// Resolve the config file path from explicit argument, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("factoria").join("config.toml"))
    }

    /// Set the default variant for a capability.
    pub fn with_provider(mut self, capability: &Capability, variant: impl Into<String>) -> Self {
        self.providers
            .insert(capability.as_str().to_string(), variant.into());
        self
    }

    /// The configured default variant for `capability`, if any.
    ///
    /// Capability names are matched exactly first, then case-insensitively,
    /// since environment overlays lower-case their keys.
    pub fn default_variant(&self, capability: &Capability) -> Option<&str> {
        let name = capability.as_str();
        self.providers
            .get(name)
            .or_else(|| {
                self.providers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Moves provider keys lower-cased by the environment overlay onto the
    /// file's spelling of the same capability, so the overlay value wins.
    fn fold_env_keys(&mut self) {
        let lowered: Vec<String> = self
            .providers
            .keys()
            .filter(|k| !k.chars().any(|c| c.is_ascii_uppercase()))
            .cloned()
            .collect();

        for key in lowered {
            let Some(name) = self
                .providers
                .keys()
                .find(|k| **k != key && k.eq_ignore_ascii_case(&key))
                .cloned()
            else {
                continue;
            };
            if let Some(value) = self.providers.remove(&key) {
                log::debug!("environment overrides default variant for {name}");
                self.providers.insert(name, value);
            }
        }
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
