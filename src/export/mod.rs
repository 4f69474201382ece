//! Network export
//!
//! Writes a finished [`Network`] to disk as XGMML (the default) or JSON.
//! Each write goes to a temporary file beside the destination and is moved
//! into place only once fully flushed, so a failed export leaves no file.

pub mod json;
pub mod xgmml;

use crate::graph::Network;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xgmml,
    Json,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xgmml => "xgmml",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xgmml" => Ok(Self::Xgmml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format '{}' (expected xgmml or json)", other)),
        }
    }
}

/// Write `network` to `path` in `format`, replacing any existing file.
pub fn write(network: &Network, path: &Path, format: ExportFormat) -> ExportResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(staged.as_file_mut());
        match format {
            ExportFormat::Xgmml => xgmml::write_to(network, &mut out)?,
            ExportFormat::Json => json::write_to(network, &mut out)?,
        }
        out.flush()?;
    }
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| ExportError::Io(e.error))?;

    info!(
        path = %path.display(),
        %format,
        nodes = network.node_count(),
        edges = network.edge_count(),
        "exported network"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network() -> Network {
        let mut network = Network::new("DrugBank v4");
        network.add_node("DB1").unwrap();
        network
    }

    #[test]
    fn format_parsing() {
        assert_eq!("xgmml".parse::<ExportFormat>(), Ok(ExportFormat::Xgmml));
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("graphml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default().extension(), "xgmml");
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xgmml");
        std::fs::write(&path, "stale").unwrap();

        write(&small_network(), &path, ExportFormat::Xgmml).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<node id=\"DB1\""));
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write(&small_network(), &path, ExportFormat::Json).unwrap_err();

        assert!(matches!(err, ExportError::Io(_)));
        assert!(!path.exists());
    }
}
