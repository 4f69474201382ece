//! Pipeline configuration
//!
//! Read from a YAML file (by default `<config_dir>/drugnet/config.yaml`);
//! every field has a default and the CLI may override any of them.

use crate::assembly::{InclusionMode, NetworkProfile, DEFAULT_DATASET, DEFAULT_SOURCE_URL};
use crate::export::ExportFormat;
use crate::ingest::XrefPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Identifier mapping backend selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MapperConfig {
    /// No backend: targets keep only their UniProt accession
    #[default]
    None,
    /// BridgeDb-style SQLite link database
    Sqlite { path: PathBuf },
    /// JSON link table loaded into memory
    Table { path: PathBuf },
}

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// DrugBank XML document
    pub source: Option<PathBuf>,
    pub mapper: MapperConfig,
    /// Output file; derived from dataset, mode and format when unset
    pub output: Option<PathBuf>,
    pub approved_only: bool,
    /// Dataset label for titles and edge provenance
    pub dataset: String,
    /// Download URL recorded in the network metadata
    pub source_url: String,
    pub format: ExportFormat,
    pub xref_policy: XrefPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: None,
            mapper: MapperConfig::None,
            output: None,
            approved_only: false,
            dataset: DEFAULT_DATASET.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            format: ExportFormat::default(),
            xref_policy: XrefPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-default config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Default config file location (~/.config/drugnet/config.yaml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drugnet").join("config.yaml"))
    }

    /// Load the default config file if it exists, else use defaults
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn inclusion_mode(&self) -> InclusionMode {
        InclusionMode::from_approved_only(self.approved_only)
    }

    pub fn profile(&self) -> NetworkProfile {
        NetworkProfile::new(self.inclusion_mode())
            .with_dataset(self.dataset.as_str())
            .with_source_url(self.source_url.as_str())
    }

    /// The configured output path, or `<stem>.<ext>` in the working directory
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "{}.{}",
                self.profile().file_stem(),
                self.format.extension()
            )),
        }
    }

    /// Check that the config describes a runnable conversion
    pub fn validate(&self) -> ConfigResult<&Path> {
        if self.dataset.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "dataset",
                reason: "must not be empty".to_string(),
            });
        }
        match &self.source {
            Some(source) => Ok(source.as_path()),
            None => Err(ConfigError::InvalidValue {
                field: "source",
                reason: "no DrugBank XML document given".to_string(),
            }),
        }
    }
}
