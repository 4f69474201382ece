//! Normalized DrugBank records
//!
//! Plain data holders produced by ingestion and consumed read-only by
//! assembly. Identity is the declared DrugBank identifier.

mod drug;
mod target;

pub use drug::{Drug, DrugSet, APPROVED_GROUP};
pub use target::Target;
