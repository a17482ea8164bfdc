use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use almanac_calendar::MachineFormat;

/// Top-level almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Default parts for the `format` subcommand.
    #[serde(default = "default_format")]
    pub format: MachineFormat,

    /// Name style settings.
    #[serde(default)]
    pub names: NamesToml,

    /// Id issuing settings.
    #[serde(default)]
    pub ids: IdsToml,
}

fn default_format() -> MachineFormat {
    MachineFormat::FULL
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamesToml {
    #[serde(default)]
    pub short: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdsToml {
    #[serde(default = "default_id_count")]
    pub count: u64,
}

impl Default for IdsToml {
    fn default() -> Self {
        Self {
            count: default_id_count(),
        }
    }
}

fn default_id_count() -> u64 {
    1
}

impl AlmanacConfig {
    /// Built-in configuration used when no file is given.
    pub fn builtin() -> Self {
        Self {
            format: default_format(),
            ..Self::default()
        }
    }

    /// Loads the config at `path`, or the built-in defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using built-in defaults");
            return Ok(Self::builtin());
        };
        info!(path = %path.display(), "loading config");
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: AlmanacConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(?config, "config loaded");
        Ok(config)
    }
}
