//! Drug record and the id-keyed drug set

use super::target::Target;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Group label marking a drug as approved.
pub const APPROVED_GROUP: &str = "approved";

/// A drug entry together with the targets it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drug {
    /// DrugBank identifier (e.g. "DB00001")
    pub id: String,
    /// Display name
    pub name: String,
    /// CAS registry number, `None` when the source value is empty
    pub cas_number: Option<String>,
    /// Free-text indication, empty when absent
    pub indication: String,
    /// InChIKey with its `InChIKey=` prefix stripped, empty when absent
    pub inchi_key: String,
    pub categories: BTreeSet<String>,
    /// Lifecycle groups ("approved", "withdrawn", ...)
    pub groups: BTreeSet<String>,
    /// Targets keyed by target id
    pub targets: BTreeMap<String, Target>,
}

impl Drug {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cas_number: None,
            indication: String::new(),
            inchi_key: String::new(),
            categories: BTreeSet::new(),
            groups: BTreeSet::new(),
            targets: BTreeMap::new(),
        }
    }

    pub fn with_cas_number(mut self, cas: impl Into<String>) -> Self {
        let cas = cas.into();
        self.cas_number = (!cas.is_empty()).then_some(cas);
        self
    }

    pub fn with_indication(mut self, indication: impl Into<String>) -> Self {
        self.indication = indication.into();
        self
    }

    pub fn with_inchi_key(mut self, inchi_key: impl Into<String>) -> Self {
        self.inchi_key = inchi_key.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Add a target. A target id already present keeps its first record.
    pub fn with_target(mut self, target: Target) -> Self {
        self.add_target(target);
        self
    }

    /// Add a target unless one with the same id exists. Returns whether it was added.
    pub fn add_target(&mut self, target: Target) -> bool {
        match self.targets.entry(target.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(target);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// True if the drug belongs to the "approved" group
    pub fn is_approved(&self) -> bool {
        self.groups.contains(APPROVED_GROUP)
    }
}

/// Drugs keyed by DrugBank id.
///
/// Iterates in id order so repeated runs over the same input visit drugs
/// (and therefore create target nodes) in the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugSet {
    drugs: BTreeMap<String, Drug>,
}

impl DrugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a drug unless its id is already present.
    ///
    /// Returns `false` when the id was taken; the first record is kept.
    pub fn insert(&mut self, drug: Drug) -> bool {
        match self.drugs.entry(drug.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(drug);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Drug> {
        self.drugs.get(id)
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drug> {
        self.drugs.values()
    }

    /// Number of distinct target ids across all drugs
    pub fn distinct_target_count(&self) -> usize {
        self.iter()
            .flat_map(|d| d.targets.keys())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl FromIterator<Drug> for DrugSet {
    fn from_iter<I: IntoIterator<Item = Drug>>(iter: I) -> Self {
        let mut set = DrugSet::new();
        for drug in iter {
            set.insert(drug);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drug_set_keeps_first_record_for_repeated_id() {
        let mut set = DrugSet::new();
        assert!(set.insert(Drug::new("DB00001", "Lepirudin")));
        assert!(!set.insert(Drug::new("DB00001", "Other name")));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("DB00001").unwrap().name, "Lepirudin");
    }

    #[test]
    fn drug_set_iterates_in_id_order() {
        let set: DrugSet = vec![
            Drug::new("DB00003", "c"),
            Drug::new("DB00001", "a"),
            Drug::new("DB00002", "b"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = set.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["DB00001", "DB00002", "DB00003"]);
    }

    #[test]
    fn empty_cas_number_is_absent() {
        let drug = Drug::new("DB00001", "Lepirudin").with_cas_number("");
        assert_eq!(drug.cas_number, None);

        let drug = Drug::new("DB00001", "Lepirudin").with_cas_number("138068-37-8");
        assert_eq!(drug.cas_number.as_deref(), Some("138068-37-8"));
    }

    #[test]
    fn repeated_target_id_keeps_first() {
        let mut drug = Drug::new("DB00001", "Lepirudin");
        assert!(drug.add_target(Target::new("BE0000048", "Prothrombin", "Human")));
        assert!(!drug.add_target(Target::new("BE0000048", "Duplicate", "Mouse")));

        assert_eq!(drug.targets.len(), 1);
        assert_eq!(drug.targets["BE0000048"].name, "Prothrombin");
    }

    #[test]
    fn approval_is_group_membership() {
        assert!(Drug::new("DB00001", "a").with_group("approved").is_approved());
        assert!(!Drug::new("DB00002", "b").with_group("experimental").is_approved());
    }

    #[test]
    fn distinct_targets_counted_across_drugs() {
        let set: DrugSet = vec![
            Drug::new("DB1", "a")
                .with_target(Target::new("T1", "t1", "Human"))
                .with_target(Target::new("T2", "t2", "Human")),
            Drug::new("DB2", "b").with_target(Target::new("T1", "t1", "Human")),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.distinct_target_count(), 2);
    }
}
