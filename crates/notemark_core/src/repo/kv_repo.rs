//! Key/value backing contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the durable string-keyed read/write surface used by slot
//!   persistence.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write` fully replaces any previous value under the key.
//! - Readiness checks reject connections that were not bootstrapped through
//!   `db::open_store`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for slot read/write operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored bytes under `key` do not decode into the expected shape.
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    /// Value could not be encoded for storage under `key`.
    Encode {
        key: String,
        source: serde_json::Error,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "corrupt persisted state in slot `{key}`: {source}")
            }
            Self::Encode { key, source } => {
                write!(f, "failed to encode value for slot `{key}`: {source}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: user_version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable, synchronous, string-keyed storage consumed by the store.
///
/// Modeled after browser local storage: a value is either present in full or
/// absent, and a write replaces the whole value under its key.
pub trait KvBacking {
    /// Reads the full value stored under `key`, if any.
    fn read(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;
    /// Overwrites the value stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> RepoResult<()>;
}

/// SQLite-backed key/value storage over the `slots` table.
#[derive(Debug)]
pub struct SqliteKvBacking<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvBacking<'conn> {
    /// Constructs a backing from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl KvBacking for SqliteKvBacking<'_> {
    fn read(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, bytes],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "slots")? {
        return Err(RepoError::MissingRequiredTable("slots"));
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
