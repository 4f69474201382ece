//! Identifier mapping trait definitions

use std::collections::BTreeSet;
use thiserror::Error;

/// An identifier namespace, named by its BridgeDb system code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataSource {
    /// BridgeDb system code (e.g. "S" for UniProt)
    pub system_code: &'static str,
    /// Human-readable name
    pub name: &'static str,
}

impl DataSource {
    pub const UNIPROT: DataSource = DataSource {
        system_code: "S",
        name: "UniProt",
    };
    pub const ENSEMBL: DataSource = DataSource {
        system_code: "En",
        name: "Ensembl",
    };
    pub const ENTREZ_GENE: DataSource = DataSource {
        system_code: "L",
        name: "Entrez Gene",
    };
    pub const HGNC: DataSource = DataSource {
        system_code: "H",
        name: "HGNC",
    };

    const KNOWN: [DataSource; 4] = [Self::UNIPROT, Self::ENSEMBL, Self::ENTREZ_GENE, Self::HGNC];

    /// Look up a known data source by system code
    pub fn by_system_code(code: &str) -> Option<DataSource> {
        Self::KNOWN.into_iter().find(|ds| ds.system_code == code)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.system_code)
    }
}

/// Errors from an identifier mapping backend
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid link table: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown data source code: {0}")]
    UnknownDataSource(String),

    #[error("Mapping backend error: {0}")]
    Backend(String),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Maps an identifier in one namespace to equivalent identifiers in another.
pub trait IdMapper {
    /// Identifiers in `target` equivalent to `id` in `source`.
    ///
    /// An unknown identifier maps to an empty set, not an error.
    fn map_id(&self, id: &str, source: DataSource, target: DataSource) -> MappingResult<BTreeSet<String>>;
}
