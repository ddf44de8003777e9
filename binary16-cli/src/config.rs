//! YAML configuration file and its merge with command-line flags

use anyhow::{Context as _, Result};
use binary16::{ArithmeticMode, ConversionMode, FloatContext, RoundingMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::OutputFormat;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default narrowing conversion mode
    pub conversion: Option<ConversionMode>,
    /// Default arithmetic mode
    pub arithmetic: Option<ArithmeticMode>,
    /// Default rounding direction
    pub rounding: Option<RoundingMode>,
    /// Default output format
    pub format: Option<OutputFormat>,
}

/// Modes given on the command line; `None` means not set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeFlags {
    pub conversion: Option<ConversionMode>,
    pub arithmetic: Option<ArithmeticMode>,
    pub rounding: Option<RoundingMode>,
}

impl CliConfig {
    /// Default location: `<config dir>/binary16/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("binary16");
            p.push("config.yaml");
            p
        })
    }

    /// Load configuration from `explicit`, or from the default location.
    ///
    /// A missing file at the default location yields the empty
    /// configuration; an explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse YAML text.
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Build the operation context: flags win over the file, the file wins
    /// over IEEE defaults.
    pub fn merge_with_args(&self, flags: ModeFlags) -> FloatContext {
        let defaults = FloatContext::IEEE;
        FloatContext::new(
            flags
                .conversion
                .or(self.conversion)
                .unwrap_or(defaults.conversion),
            flags
                .arithmetic
                .or(self.arithmetic)
                .unwrap_or(defaults.arithmetic),
            flags.rounding.or(self.rounding).unwrap_or(defaults.rounding),
        )
    }
}
