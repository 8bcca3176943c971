use anyhow::{Context, Result};
use directories::ProjectDirs;
use ethereum_rlp::{DecodeOptions, Format, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoder configuration
    pub codec: CodecConfig,
    /// Decoder configuration
    pub decode: DecodeConfig,
    /// Logging configuration
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Representation of encoded output
    pub output_format: Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Maximum list nesting accepted by the decoder
    pub max_depth: usize,
    /// Accept bytes after the first item
    pub allow_trailing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level
    pub level: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            output_format: Format::Hex,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl DecodeConfig {
    pub fn options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
            allow_trailing: self.allow_trailing,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context("Failed to read configuration file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        fs::write(path, content)
            .context("Failed to write configuration file")?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.decode.max_depth == 0 {
            anyhow::bail!("max_depth must be greater than 0");
        }

        if self.decode.max_depth > MAX_DEPTH_LIMIT {
            anyhow::bail!("max_depth must not exceed {}", MAX_DEPTH_LIMIT);
        }

        if self.log.level.trim().is_empty() {
            anyhow::bail!("log level must not be empty");
        }

        Ok(())
    }

    /// Platform configuration path, e.g. `~/.config/ethereum-rlp/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "ethereum-rust", "ethereum-rlp")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load an explicit file, else the default file if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
