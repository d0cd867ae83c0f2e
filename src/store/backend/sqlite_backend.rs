//! SQLite Storage Backend
//!
//! One table, `LocalStore(key TEXT PRIMARY KEY, value TEXT)`, inside
//! `<namespace>.db`. The connection stays open for the lifetime of the
//! backend and every statement runs in autocommit mode.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::traits::{BackendKind, StorageBackend};
use crate::store::errors::StoreResult;
use crate::store::namespace::NamespaceDir;
use crate::store::value::coerce_to_string;

/// Name of the single table holding the key space
pub const TABLE_NAME: &str = "LocalStore";

fn create_table_sql() -> String {
    format!("CREATE TABLE {TABLE_NAME} (key TEXT PRIMARY KEY, value TEXT)")
}

/// Relational backend
///
/// Values are stored as their string form and always read back as strings.
pub struct SqliteBackend {
    db_path: PathBuf,
    conn: Connection,
}

impl SqliteBackend {
    /// Open (creating if absent) the namespace database.
    ///
    /// The default table is created only when the database defines no
    /// schema objects at all.
    pub fn open(namespace: &NamespaceDir) -> StoreResult<Self> {
        let db_path = namespace.file_with_extension("db");
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let conn = Connection::open_with_flags(&db_path, flags)?;

        let backend = Self { db_path, conn };
        let has_schema = backend
            .conn
            .prepare("SELECT name FROM sqlite_master")?
            .exists([])?;
        if !has_schema {
            backend.create_default_table()?;
            tracing::debug!(path = %backend.db_path.display(), "created default table");
        }

        Ok(backend)
    }

    /// Path of the database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn create_default_table(&self) -> StoreResult<()> {
        self.conn.execute(&create_table_sql(), [])?;
        Ok(())
    }

    fn row_exists(&self, key: &str) -> StoreResult<bool> {
        let exists = self
            .conn
            .prepare(&format!("SELECT key FROM {TABLE_NAME} WHERE key = ?1"))?
            .exists(params![key])?;
        Ok(exists)
    }
}

impl std::fmt::Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl StorageBackend for SqliteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let value: Option<Option<String>> = self
            .conn
            .query_row(
                &format!("SELECT value FROM {TABLE_NAME} WHERE key = ?1"),
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.flatten().map(Value::String))
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        let value = coerce_to_string(&value);
        if self.row_exists(key)? {
            self.conn.execute(
                &format!("UPDATE {TABLE_NAME} SET value = ?1 WHERE key = ?2"),
                params![value, key],
            )?;
        } else {
            self.conn.execute(
                &format!("INSERT INTO {TABLE_NAME} (key, value) VALUES (?1, ?2)"),
                params![key, value],
            )?;
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn.execute(
            &format!("DELETE FROM {TABLE_NAME} WHERE key = ?1"),
            params![key],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.conn
            .execute(&format!("DROP TABLE IF EXISTS {TABLE_NAME}"), [])?;
        self.create_default_table()?;
        tracing::info!(path = %self.db_path.display(), "dropped and recreated table");
        Ok(())
    }

    fn physical_path(&self) -> Option<PathBuf> {
        Some(self.db_path.clone())
    }
}
