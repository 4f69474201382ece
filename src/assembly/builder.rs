//! Assembler: drug set → drug-target network
//!
//! One pass over the drugs in id order. Drug and target nodes share one id
//! namespace, tracked in an index owned by the pass. Target nodes are
//! created on first encounter and never rewritten; edges are created once
//! per (drug, target) pair.

use super::profile::NetworkProfile;
use super::report::{Assembly, AssemblyCounts, Diagnostic, NodeKind};
use crate::graph::{EdgeId, Network, NetworkResult, NodeId};
use crate::mapping::{DataSource, IdMapper};
use crate::model::{Drug, DrugSet, Target};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// Namespaces each target's UniProt accession is resolved into, in the
/// order their identifiers appear in the `identifiers` attribute.
pub const RESOLUTION_NAMESPACES: [DataSource; 3] =
    [DataSource::ENSEMBL, DataSource::ENTREZ_GENE, DataSource::HGNC];

/// Interaction type recorded on every edge
pub const INTERACTION_TYPE: &str = "drug-target";

/// Builds a [`Network`] from a [`DrugSet`].
pub struct Assembler<'a> {
    profile: &'a NetworkProfile,
    mapper: &'a dyn IdMapper,
}

impl<'a> Assembler<'a> {
    pub fn new(profile: &'a NetworkProfile, mapper: &'a dyn IdMapper) -> Self {
        Self { profile, mapper }
    }

    /// Assemble a fresh network.
    ///
    /// Resolution failures are recorded as diagnostics and do not stop the
    /// pass. A `NetworkError` means an invariant of the network itself was
    /// violated and is returned as-is.
    pub fn assemble(&self, drugs: &DrugSet) -> NetworkResult<Assembly> {
        let title = self.profile.title();
        let mut network = Network::new(title.clone());
        network.append_metadata("Database", title)?;
        network.append_metadata("URL", self.profile.source_url.as_str())?;

        let mut pass = Pass {
            profile: self.profile,
            mapper: self.mapper,
            network,
            kinds: HashMap::new(),
            seen_edges: HashMap::new(),
            counts: AssemblyCounts::default(),
            diagnostics: Vec::new(),
        };

        for drug in drugs.iter() {
            if !self.profile.mode.includes(drug) {
                debug!(drug = %drug.id, "excluded by inclusion mode");
                continue;
            }
            pass.add_drug(drug)?;
        }

        info!(
            drugs = pass.counts.drugs,
            targets = pass.counts.targets,
            edges = pass.counts.edges,
            diagnostics = pass.diagnostics.len(),
            "assembled network"
        );

        Ok(Assembly {
            network: pass.network,
            counts: pass.counts,
            diagnostics: pass.diagnostics,
        })
    }
}

/// State of a single assembly pass
struct Pass<'a> {
    profile: &'a NetworkProfile,
    mapper: &'a dyn IdMapper,
    network: Network,
    /// Every node created so far, by id
    kinds: HashMap<NodeId, NodeKind>,
    /// Edge keys already linked, with the pair that claimed each
    seen_edges: HashMap<EdgeId, (NodeId, NodeId)>,
    counts: AssemblyCounts,
    diagnostics: Vec<Diagnostic>,
}

impl Pass<'_> {
    fn add_drug(&mut self, drug: &Drug) -> NetworkResult<()> {
        let Some(drug_node) = self.drug_node(drug)? else {
            return Ok(());
        };
        for target in drug.targets.values() {
            if let Some(target_node) = self.target_node(target)? {
                self.link(&drug_node, &target_node)?;
            }
        }
        Ok(())
    }

    /// Claim `id` for a node of `kind`.
    ///
    /// `Some(true)` if the id is new, `Some(false)` if a node of the same kind
    /// already holds it, `None` on a kind conflict (recorded as a diagnostic).
    fn claim(&mut self, id: &NodeId, kind: NodeKind) -> Option<bool> {
        match self.kinds.entry(id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(kind);
                Some(true)
            }
            Entry::Occupied(existing) if *existing.get() == kind => Some(false),
            Entry::Occupied(existing) => {
                let existing = *existing.get();
                warn!(node = %id, %existing, requested = %kind, "node id used by both kinds");
                self.diagnostics.push(Diagnostic::KindConflict {
                    node_id: id.to_string(),
                    existing,
                    requested: kind,
                });
                None
            }
        }
    }

    fn drug_node(&mut self, drug: &Drug) -> NetworkResult<Option<NodeId>> {
        let id = NodeId::from(drug.id.as_str());
        match self.claim(&id, NodeKind::Drug) {
            None => return Ok(None),
            Some(false) => return Ok(Some(id)),
            Some(true) => {}
        }

        debug!(drug = %id, "create drug node");
        let node = self.network.add_node(id.clone())?;
        node.append_attribute("DrugBankID", drug.id.as_str())?;
        node.append_attribute("CAS", drug.cas_number.as_deref().unwrap_or_default())?;
        node.append_attribute("DrugName", drug.name.as_str())?;
        node.append_attribute("name", drug.id.as_str())?;
        node.append_attribute("Indication", drug.indication.as_str())?;
        node.append_attribute("InChiKey", drug.inchi_key.as_str())?;
        node.append_attribute("biologicalType", "drug")?;
        node.append_attribute("identifiers", drug_identifiers(drug))?;
        node.append_attribute("categories", join_labels(&drug.categories))?;
        node.append_attribute("groups", join_labels(&drug.groups))?;

        self.counts.drugs += 1;
        Ok(Some(id))
    }

    fn target_node(&mut self, target: &Target) -> NetworkResult<Option<NodeId>> {
        let id = NodeId::from(target.id.as_str());
        match self.claim(&id, NodeKind::Target) {
            None => return Ok(None),
            Some(false) => return Ok(Some(id)),
            Some(true) => {}
        }

        debug!(target_id = %id, uniprot = ?target.uniprot_id, "create target node");
        let identifiers = target
            .uniprot_id
            .as_deref()
            .map(|seed| self.resolve_identifiers(target, seed));

        let node = self.network.add_node(id.clone())?;
        if let Some(uniprot) = &target.uniprot_id {
            node.append_attribute("UniProt", uniprot.as_str())?;
        }
        if let Some(gene) = &target.gene_name {
            node.append_attribute("GeneName", gene.as_str())?;
            node.append_attribute("name", gene.as_str())?;
        }
        node.append_attribute("Organism", target.organism.as_str())?;
        node.append_attribute("biologicalType", "target")?;
        if let Some(identifiers) = identifiers {
            node.append_attribute("identifiers", identifiers)?;
        }

        self.counts.targets += 1;
        Ok(Some(id))
    }

    /// `[seed,ensembl...,entrez...,hgnc...]`; a failed call adds nothing.
    fn resolve_identifiers(&mut self, target: &Target, seed: &str) -> String {
        let mut identifiers = vec![seed.to_string()];
        for namespace in RESOLUTION_NAMESPACES {
            match self.mapper.map_id(seed, DataSource::UNIPROT, namespace) {
                Ok(mapped) => identifiers.extend(mapped),
                Err(e) => {
                    warn!(target_id = %target.id, %seed, %namespace, error = %e, "identifier mapping failed");
                    self.diagnostics.push(Diagnostic::ResolutionFailed {
                        target_id: target.id.clone(),
                        source_id: seed.to_string(),
                        namespace: namespace.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        format!("[{}]", identifiers.join(","))
    }

    fn link(&mut self, drug: &NodeId, target: &NodeId) -> NetworkResult<()> {
        let edge_id = EdgeId::for_pair(drug, target);
        match self.seen_edges.entry(edge_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert((drug.clone(), target.clone()));
            }
            Entry::Occupied(linked) if linked.get().0 == *drug && linked.get().1 == *target => {
                return Ok(());
            }
            Entry::Occupied(linked) => {
                let (source, existing_target) = linked.get();
                warn!(edge = %edge_id, drug = %drug, target_id = %target, "edge id already used by another pair");
                self.diagnostics.push(Diagnostic::EdgeIdCollision {
                    edge_id: edge_id.to_string(),
                    existing: (source.to_string(), existing_target.to_string()),
                    requested: (drug.to_string(), target.to_string()),
                });
                return Ok(());
            }
        }
        let edge = self.network.add_edge(edge_id, drug, target)?;
        edge.append_attribute("datasource", self.profile.dataset.as_str())?;
        edge.append_attribute("interactionType", INTERACTION_TYPE)?;
        self.counts.edges += 1;
        Ok(())
    }
}

/// `[id]` or `[id,cas]`
fn drug_identifiers(drug: &Drug) -> String {
    match &drug.cas_number {
        Some(cas) => format!("[{},{}]", drug.id, cas),
        None => format!("[{}]", drug.id),
    }
}

/// Labels joined with ", "; empty for an empty set
fn join_labels(labels: &BTreeSet<String>) -> String {
    labels
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
