//! Mapping backends for tests

use drugnet::{DataSource, IdMapper, InMemoryMapper, MappingError};
use std::collections::BTreeSet;

/// Links for prothrombin (P00734) into every resolution namespace
pub fn thrombin_mapper() -> InMemoryMapper {
    InMemoryMapper::new()
        .with_link("P00734", DataSource::UNIPROT, DataSource::ENSEMBL, "ENSG00000180210")
        .with_link("P00734", DataSource::UNIPROT, DataSource::ENTREZ_GENE, "2147")
        .with_link("P00734", DataSource::UNIPROT, DataSource::HGNC, "F2")
}

/// Fails every lookup
pub struct FailingMapper;

impl IdMapper for FailingMapper {
    fn map_id(
        &self,
        _id: &str,
        _source: DataSource,
        _target: DataSource,
    ) -> Result<BTreeSet<String>, MappingError> {
        Err(MappingError::Backend("service unavailable".to_string()))
    }
}
