//! Identifier resolution backends
//!
//! Assembly uses these to enrich target nodes with equivalent identifiers
//! from other namespaces.

mod memory;
mod sqlite;
mod traits;

pub use memory::InMemoryMapper;
pub use sqlite::SqliteMapper;
pub use traits::{DataSource, IdMapper, MappingError, MappingResult};
