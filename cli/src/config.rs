use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr};
use cube_core::DEFAULT_SCRAMBLE_LENGTH;
use log::debug;
use serde::Deserialize;

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many moves `scramble` generates
    pub scramble_length: usize,
    /// Whether to draw stickers with terminal colours
    pub color: bool,
    /// Seed scrambles so they repeat between runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            color: true,
            seed: None,
        }
    }
}

impl Config {
    /// Read the config file at `path`, or at the default location if no path is given. A missing file at the
    /// default location means default settings; a missing file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        debug!("Reading config from {}", path.display());

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Couldn't read config file {}", path.display()))?;

        Config::parse(&text).wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }
}

#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cube").join("config.toml"))
}
