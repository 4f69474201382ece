//! SQLite-backed identifier mapping
//!
//! Reads a BridgeDb-style link database. Every row of the `link` table
//! ties a right-hand identifier (any namespace) to a left-hand gene
//! identifier; two identifiers are equivalent when they share a left-hand
//! gene.

use super::traits::{DataSource, IdMapper, MappingError, MappingResult};
use rusqlite::{params, Connection, OpenFlags};
use std::collections::BTreeSet;
use std::path::Path;

const MAP_QUERY: &str = "
    SELECT DISTINCT dest.idRight
    FROM link AS src
    JOIN link AS dest
        ON src.idLeft = dest.idLeft AND src.codeLeft = dest.codeLeft
    WHERE src.idRight = ?1 AND src.codeRight = ?2 AND dest.codeRight = ?3
";

/// BridgeDb-style SQLite mapper
pub struct SqliteMapper {
    conn: Connection,
}

impl SqliteMapper {
    /// Open an existing link database read-only
    pub fn open(path: impl AsRef<Path>) -> MappingResult<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::check_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create an empty in-memory link database (useful for testing)
    pub fn open_in_memory() -> MappingResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> MappingResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS link (
                idLeft TEXT NOT NULL,
                codeLeft TEXT NOT NULL,
                idRight TEXT NOT NULL,
                codeRight TEXT NOT NULL,
                PRIMARY KEY (idLeft, codeLeft, idRight, codeRight)
            );

            CREATE INDEX IF NOT EXISTS idx_link_right
                ON link(idRight, codeRight);
            "#,
        )?;
        Ok(())
    }

    fn check_schema(conn: &Connection) -> MappingResult<()> {
        let has_link: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'link'",
            [],
            |row| row.get(0),
        )?;
        if !has_link {
            return Err(MappingError::Backend(
                "database has no 'link' table".to_string(),
            ));
        }
        Ok(())
    }

    /// Tie `id` in `source` to the gene `gene_id` in `gene_source`
    pub fn insert_link(
        &self,
        gene_id: &str,
        gene_source: DataSource,
        id: &str,
        source: DataSource,
    ) -> MappingResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO link (idLeft, codeLeft, idRight, codeRight) VALUES (?1, ?2, ?3, ?4)",
            params![gene_id, gene_source.system_code, id, source.system_code],
        )?;
        Ok(())
    }
}

impl IdMapper for SqliteMapper {
    fn map_id(&self, id: &str, source: DataSource, target: DataSource) -> MappingResult<BTreeSet<String>> {
        let mut stmt = self.conn.prepare_cached(MAP_QUERY)?;
        let rows = stmt.query_map(
            params![id, source.system_code, target.system_code],
            |row| row.get::<_, String>(0),
        )?;
        let mut mapped = BTreeSet::new();
        for row in rows {
            mapped.insert(row?);
        }
        Ok(mapped)
    }
}
