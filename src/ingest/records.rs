//! DrugBank schema: drug and target records from captured subtrees
//!
//! Required elements are read directly and their absence is fatal.
//! Optional wrappers (`indication`, `groups`, `categories`, `targets`,
//! `calculated-properties`, `polypeptide`, `external-identifiers`) default
//! to empty values.

use super::element::XmlElement;
use super::parser::{IngestError, IngestResult, XrefPolicy};
use crate::model::{Drug, Target};
use std::collections::BTreeSet;
use tracing::warn;

/// Calculated-property kind holding the structural key
const INCHIKEY_KIND: &str = "InChIKey";
/// Length of the `InChIKey=` prefix on the property value
const INCHIKEY_PREFIX_LEN: usize = 9;
/// External-identifier resource naming UniProt accessions
const UNIPROT_RESOURCE: &str = "UniProtKB";

fn required(element: &XmlElement, name: &str, owner: &str) -> IngestResult<String> {
    element
        .child(name)
        .map(XmlElement::value)
        .ok_or_else(|| IngestError::MissingElement {
            element: name.to_string(),
            owner: owner.to_string(),
        })
}

/// Read one root-level `<drug>` element.
///
/// `position` is the 1-based index of the element in the document, used to
/// name the drug in errors raised before its id is known. Returns the drug
/// and the number of repeated target entries that were dropped.
pub(super) fn read_drug(
    element: &XmlElement,
    position: usize,
    policy: XrefPolicy,
) -> IngestResult<(Drug, usize)> {
    let id = required(element, "drugbank-id", &format!("drug #{}", position))?;
    let owner = format!("drug {}", id);

    let mut drug = Drug::new(id, required(element, "name", &owner)?)
        .with_cas_number(required(element, "cas-number", &owner)?)
        .with_indication(element.child("indication").map(XmlElement::value).unwrap_or_default())
        .with_inchi_key(read_inchi_key(element, &owner)?);

    drug.groups = read_groups(element);
    drug.categories = read_categories(element, &owner)?;

    let mut duplicates = 0;
    for target in read_targets(element, &drug.id, policy)? {
        let target_id = target.id.clone();
        if !drug.add_target(target) {
            warn!(drug = %drug.id, target_id = %target_id, "target listed twice, keeping first entry");
            duplicates += 1;
        }
    }

    Ok((drug, duplicates))
}

fn read_inchi_key(drug: &XmlElement, owner: &str) -> IngestResult<String> {
    let Some(props) = drug.child("calculated-properties") else {
        return Ok(String::new());
    };
    for property in props.children("property") {
        if required(property, "kind", owner)? == INCHIKEY_KIND {
            let value = required(property, "value", owner)?;
            if value.len() < INCHIKEY_PREFIX_LEN {
                return Err(IngestError::ShortPropertyValue {
                    owner: owner.to_string(),
                    kind: INCHIKEY_KIND.to_string(),
                    value,
                    prefix_len: INCHIKEY_PREFIX_LEN,
                });
            }
            return match value.get(INCHIKEY_PREFIX_LEN..) {
                Some(key) => Ok(key.to_string()),
                None => Err(IngestError::PrefixSplitsCharacter {
                    owner: owner.to_string(),
                    kind: INCHIKEY_KIND.to_string(),
                    value,
                    prefix_len: INCHIKEY_PREFIX_LEN,
                }),
            };
        }
    }
    Ok(String::new())
}

fn read_groups(drug: &XmlElement) -> BTreeSet<String> {
    drug.child("groups")
        .map(|groups| groups.children("group").map(XmlElement::value).collect())
        .unwrap_or_default()
}

/// Each `<category>` entry wraps a `<category>` text element.
fn read_categories(drug: &XmlElement, owner: &str) -> IngestResult<BTreeSet<String>> {
    let Some(categories) = drug.child("categories") else {
        return Ok(BTreeSet::new());
    };
    categories
        .children("category")
        .map(|entry| required(entry, "category", owner))
        .collect()
}

fn read_targets(drug: &XmlElement, drug_id: &str, policy: XrefPolicy) -> IngestResult<Vec<Target>> {
    let Some(targets) = drug.child("targets") else {
        return Ok(Vec::new());
    };
    targets
        .children("target")
        .map(|target| read_target(target, drug_id, policy))
        .collect()
}

fn read_target(element: &XmlElement, drug_id: &str, policy: XrefPolicy) -> IngestResult<Target> {
    let id = required(element, "id", &format!("a target of drug {}", drug_id))?;
    let owner = format!("target {} of drug {}", id, drug_id);

    let mut target = Target::new(
        id,
        required(element, "name", &owner)?,
        required(element, "organism", &owner)?,
    );

    if let Some(polypeptide) = element.child("polypeptide") {
        target.gene_name = Some(required(polypeptide, "gene-name", &owner)?);
        target.uniprot_id = read_uniprot_id(polypeptide, &owner, policy)?;
    }
    Ok(target)
}

fn read_uniprot_id(
    polypeptide: &XmlElement,
    owner: &str,
    policy: XrefPolicy,
) -> IngestResult<Option<String>> {
    let Some(xrefs) = polypeptide.child("external-identifiers") else {
        return Ok(None);
    };
    let mut matches = Vec::new();
    for xref in xrefs.children("external-identifier") {
        if required(xref, "resource", owner)? == UNIPROT_RESOURCE {
            matches.push(required(xref, "identifier", owner)?);
        }
    }
    policy.select(matches, owner, UNIPROT_RESOURCE)
}
