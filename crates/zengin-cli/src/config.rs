use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zengin_core::source::DEFAULT_DATA_DIR;

/// Configuration for zengin.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ZENGIN_* prefix)
/// 3. Config file (~/.config/zengin/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of a zengin-code `source-data` checkout.
    ///
    /// Can be set via:
    /// - CLI: --data-dir /path/to/source-data
    /// - ENV: ZENGIN_DATA_DIR
    /// - Config: data_dir = "/path/to/source-data"
    /// - Default: ./source-data
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Logger settings passed to twyg.
    #[serde(default)]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            logging: twyg::Opts::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("zengin");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, replacing the data directory when `--data-dir`
    /// was given.
    pub fn load_with_data_dir(data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(data_dir) = data_dir {
            config.data_dir = data_dir;
        }
        Ok(config)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/zengin/config.toml
/// - macOS: ~/Library/Application Support/zengin/config.toml
/// - Windows: %APPDATA%\zengin\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zengin")
        .join("config.toml")
}
