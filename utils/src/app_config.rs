use std::path::Path;
use std::sync::RwLock;

use config::{Config, Environment, File, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// Location of the Spectrum Scale command-line tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub bindir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub dryrun: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub scale: ScaleConfig,
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Initialize the global configuration from the embedded defaults,
    /// with `APP_*` environment variables layered on top.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = Config::builder();

        if let Some(contents) = default_config {
            builder = builder.add_source(File::from_str(contents, FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("APP").separator("_"));

        let config = builder.build()?;

        let mut writer = CONFIG
            .write()
            .map_err(|_| Error::new("Configuration lock poisoned"))?;
        *writer = config;

        Ok(())
    }

    /// Layer a configuration file over the current settings.
    pub fn merge_config(config_file: Option<&Path>) -> Result<()> {
        if let Some(path) = config_file {
            let mut writer = CONFIG
                .write()
                .map_err(|_| Error::new("Configuration lock poisoned"))?;
            let current = std::mem::take(&mut *writer);
            *writer = Config::builder()
                .add_source(current)
                .add_source(File::from(path))
                .build()?;
        }

        Ok(())
    }

    /// Override a single key.
    pub fn set(key: &str, value: &str) -> Result<()> {
        let mut writer = CONFIG
            .write()
            .map_err(|_| Error::new("Configuration lock poisoned"))?;
        let current = std::mem::take(&mut *writer);
        *writer = Config::builder()
            .add_source(current)
            .set_override(key, value)?
            .build()?;

        Ok(())
    }

    /// Fetch a single typed value by dotted key.
    pub fn get<'de, T>(key: &str) -> Result<T>
    where
        T: Deserialize<'de>,
    {
        let reader = CONFIG
            .read()
            .map_err(|_| Error::new("Configuration lock poisoned"))?;

        Ok(reader.get::<T>(key)?)
    }

    /// Deserialize the whole configuration tree.
    pub fn fetch() -> Result<AppConfig> {
        let reader = CONFIG
            .read()
            .map_err(|_| Error::new("Configuration lock poisoned"))?;

        Ok(reader.clone().try_deserialize()?)
    }
}
