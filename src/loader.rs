//! Read, parse and generate declarations for a config in one call

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::config::{parse_config, read_config, ConfigError};
use crate::stub::{generate_config_types_to, DEFAULT_TYPES_PATH};

/// Config file read by [`replit_config`]
pub const DEFAULT_CONFIG_PATH: &str = ".replit";

/// Module name used in the generated declaration
pub const DEFAULT_MODULE_NAME: &str = "ReplitConfig";

/// Where to read the config from and where to write its declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub config_path: PathBuf,
    pub types_path: PathBuf,
    pub module_name: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            types_path: PathBuf::from(DEFAULT_TYPES_PATH),
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

/// A loaded config together with the declaration generated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplitConfig {
    pub config: toml::Table,
    pub types: String,
}

impl ReplitConfig {
    /// Convert the parsed table into a concrete type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let value = toml::Value::Table(self.config.clone());
        Ok(value.try_into()?)
    }
}

/// Read `options.config_path`, parse it and write its declaration to
/// `options.types_path`.
///
/// Steps run in order and the first failure is returned unchanged. A missing
/// config file fails before anything is written.
pub fn load_config(options: &LoadOptions) -> Result<ReplitConfig, ConfigError> {
    let text = read_config(&options.config_path)?;
    let config = parse_config(&text)?;
    let types = generate_config_types_to(&config, &options.module_name, &options.types_path)?;
    Ok(ReplitConfig { config, types })
}

/// Load `.replit` from the current directory and write `replit.d.ts` next to it.
pub fn replit_config() -> Result<ReplitConfig, ConfigError> {
    load_config(&LoadOptions::default())
}
