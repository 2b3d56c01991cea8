//! Configuration file support
//!
//! Settings come from a TOML file and are overridden by command-line
//! arguments. Search order for [`Config::load`]:
//!
//! 1. `./pdf-paragraphs.toml`
//! 2. `<config dir>/pdf-paragraphs/config.toml`
//!
//! # Example
//!
//! ```toml
//! [conversion]
//! grouping = "line"      # or "block"
//! page_breaks = true
//!
//! [export]
//! sheet_name = "Paragraphs"
//! ordinal_width = 15
//! paragraph_width = 80
//! row_height = 60
//! wrap_text = true
//!
//! [batch]
//! fail_fast = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{ConversionOptions, LineGrouping};
use crate::export::SheetLayout;
use crate::pipeline::BatchPolicy;

/// Local config file name
pub const LOCAL_CONFIG_FILE: &str = "pdf-paragraphs.toml";

/// Application directory under the user config dir
pub const APP_CONFIG_DIR: &str = "pdf-paragraphs";

/// Config error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Batch section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Stop at the first failing file
    pub fail_fast: bool,
}

/// File-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PDF to document conversion
    pub conversion: ConversionOptions,
    /// Spreadsheet layout
    pub export: SheetLayout,
    /// Batch behavior
    pub batch: BatchConfig,
}

impl Config {
    /// Load from the first config file found, or defaults when none exists
    pub fn load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load_from_path(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Candidate config locations, in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_CONFIG_DIR).join("config.toml"));
        }
        paths
    }

    /// Merge with CLI overrides (CLI takes precedence)
    pub fn merge_with_cli(&self, cli: &CliOverrides) -> PipelineConfig {
        let mut conversion = self.conversion.clone();
        if let Some(grouping) = cli.grouping {
            conversion.grouping = grouping;
        }
        if let Some(page_breaks) = cli.page_breaks {
            conversion.page_breaks = page_breaks;
        }

        // Rebuild through the builder so file values get clamped too
        let export = &self.export;
        let layout = SheetLayout::builder()
            .sheet_name(cli.sheet_name.clone().unwrap_or_else(|| export.sheet_name.clone()))
            .ordinal_width(export.ordinal_width)
            .paragraph_width(cli.paragraph_width.unwrap_or(export.paragraph_width))
            .row_height(cli.row_height.unwrap_or(export.row_height))
            .wrap_text(export.wrap_text)
            .build();

        let fail_fast = cli.fail_fast.unwrap_or(self.batch.fail_fast);

        PipelineConfig {
            conversion,
            layout,
            batch_policy: if fail_fast {
                BatchPolicy::FailFast
            } else {
                BatchPolicy::ContinueOnError
            },
        }
    }
}

/// Values explicitly set on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub grouping: Option<LineGrouping>,
    pub page_breaks: Option<bool>,
    pub sheet_name: Option<String>,
    pub paragraph_width: Option<f64>,
    pub row_height: Option<f64>,
    pub fail_fast: Option<bool>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    /// PDF to document conversion
    pub conversion: ConversionOptions,
    /// Spreadsheet layout
    pub layout: SheetLayout,
    /// Batch error policy
    pub batch_policy: BatchPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Config::default().merge_with_cli(&CliOverrides::default())
    }
}
