use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order on top
/// of the default config.
pub const CONFIG_PATH_ENV: &str = "VERNAN_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra));
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the given config files and applies each override, a TOML snippet
/// such as `contact.endpoint_override = "http://..."`, on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, item| {
            builder.add_source(File::from_str(item, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    pub endpoint_override: Option<Url>,
}
