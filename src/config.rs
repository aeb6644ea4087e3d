//! Configuration file handling for img-to-ascii.
//!
//! Loads configuration from `<config dir>/img-to-ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, CharacterRamp, RampError};
use crate::output::DEFAULT_OUTPUT_PATH;

/// Upper bound offered by the scale prompt unless configured otherwise.
pub const DEFAULT_MAX_SCALE_PERCENT: u32 = 400;

/// Configuration file structure for img-to-ascii.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Preset name: standard, blocks, minimal, detailed
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom glyph ramp; wins over `charset`
    #[serde(default)]
    pub ramp: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default = "default_max_scale")]
    pub max_scale_percent: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_scale_percent: DEFAULT_MAX_SCALE_PERCENT,
        }
    }
}

fn default_max_scale() -> u32 {
    DEFAULT_MAX_SCALE_PERCENT
}

impl Config {
    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Ramp selected by this config: custom ramp, else preset, else standard.
    pub fn ramp(&self) -> Result<CharacterRamp, ConfigError> {
        if let Some(glyphs) = &self.render.ramp {
            return glyphs.parse().map_err(ConfigError::InvalidRamp);
        }
        match &self.render.charset {
            Some(name) => CharSet::from_name(name)
                .map(|cs| cs.ramp())
                .ok_or_else(|| ConfigError::UnknownCharset(name.clone())),
            None => Ok(CharacterRamp::default()),
        }
    }

    /// Where renders are saved when the user accepts the default.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unknown charset '{0}' (expected standard, blocks, minimal or detailed)")]
    UnknownCharset(String),
    #[error("Invalid ramp: {0}")]
    InvalidRamp(#[source] RampError),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("img-to-ascii").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".img-to-ascii.toml"))
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# img-to-ascii configuration

[render]
# Character set: standard, blocks, minimal, detailed
charset = "standard"
# Custom ramp, first glyph for black, last for white (overrides charset)
# ramp = " .:-=+*#%@"

[output]
# File written by the save action when no other path is chosen
path = "output.txt"

[menu]
# Largest percentage the scale prompt accepts
max_scale_percent = 400
"#;
