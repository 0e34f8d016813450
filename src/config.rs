//! Configuration file support
//!
//! Loads settings from ~/.source-annotate.toml (or
//! %USERPROFILE%\.source-annotate.toml on Windows)
//!
//! Example:
//! ```toml
//! # source-annotate configuration
//! line-numbers = true
//! format = "terminal"
//!
//! [colors]
//! "keyword.control" = "#c678dd"
//! comment = "#5c6370"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{AnnotateError, Result};
use crate::output::OutputFormat;
use crate::syntax::{Category, Color, PatternTable};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Whether to show line numbers in the gutter
    pub line_numbers: bool,
    /// Default output format
    pub format: OutputFormat,
    /// Category name -> hex color overrides
    pub colors: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_numbers: true,
            format: OutputFormat::Html,
            colors: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".source-annotate.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".source-annotate.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing or broken file falls back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnnotateError::FileNotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply color overrides to a pattern table
    ///
    /// Returns the number of overrides that took effect. Unknown categories
    /// and malformed colors are skipped with a warning.
    pub fn apply(&self, table: &mut PatternTable) -> usize {
        let mut applied = 0;
        for (name, hex) in &self.colors {
            let Some(category) = Category::from_name(name) else {
                warn!(category = %name, "unknown category in config");
                continue;
            };
            let Some(color) = Color::from_hex(hex) else {
                warn!(category = %name, color = %hex, "invalid color in config");
                continue;
            };
            let style = category.default_style().with_fg(color);
            if table.restyle(category, style) > 0 {
                applied += 1;
            }
        }
        applied
    }
}
