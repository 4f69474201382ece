//! Target record

/// A biological target referenced by a drug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// DrugBank target identifier (e.g. "BE0000048")
    pub id: String,
    /// Display name
    pub name: String,
    /// Organism name
    pub organism: String,
    /// Gene name, absent when the target has no polypeptide record
    pub gene_name: Option<String>,
    /// UniProtKB accession from the polypeptide's external identifiers
    pub uniprot_id: Option<String>,
}

impl Target {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        organism: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organism: organism.into(),
            gene_name: None,
            uniprot_id: None,
        }
    }

    pub fn with_gene_name(mut self, gene_name: impl Into<String>) -> Self {
        self.gene_name = Some(gene_name.into());
        self
    }

    pub fn with_uniprot_id(mut self, uniprot_id: impl Into<String>) -> Self {
        self.uniprot_id = Some(uniprot_id.into());
        self
    }
}
