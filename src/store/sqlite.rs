//! SQLite-backed log store
//!
//! Owns the single database connection and implements the three core
//! operations: append, page, pagination_info.
//!
//! ## Concurrency Model
//! - One connection behind a `parking_lot::Mutex` serializes access from
//!   this process; SQLite's WAL journal lets other connections (tests,
//!   sibling processes) read the last-committed snapshot while a write is
//!   in flight.
//! - A busy timeout bounds writer-vs-writer contention across connections.
//!
//! ## Failure Model
//! - Open/pragma/migrate failures are returned from [`LogStore::open`];
//!   the caller treats them as fatal startup errors.
//! - A write either commits one full row or nothing.
//! - A malformed metadata blob never fails a read: that row decodes to an
//!   empty mapping, sibling rows are unaffected.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OpenFlags};

use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::record::{Level, LogRecord, Metadata, NewRecord};

use super::{PaginationInfo, PAGE_SIZE};

/// Schema SQL embedded at compile time
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Durable log storage over a single SQLite database file
///
/// Safe to share across threads (`&self` everywhere); the connection is
/// serialized internally and the journal mode handles cross-connection
/// concurrency.
#[derive(Debug)]
pub struct LogStore {
    /// The one connection this process holds (exclusive access via lock)
    conn: Mutex<Connection>,
}

impl LogStore {
    /// Open or create a log store with the given config
    ///
    /// On startup:
    /// 1. Validate the path and create missing parent directories
    /// 2. Open/create the database file
    /// 3. Set the busy timeout
    /// 4. Enable WAL journaling and apply the idempotent schema
    /// 5. Ping the database to confirm it is usable
    pub fn open(config: Config) -> Result<Self> {
        // An empty path would make SQLite open a private temporary
        // database, silently dropping every record on close
        if config.db_path.as_os_str().is_empty() {
            return Err(ForgeError::Config("db_path must not be empty".to_string()));
        }

        // SQLite creates the file but not the directories above it
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &config.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;

        Self::initialize_connection(&conn)?;

        tracing::info!(db_path = %config.db_path.display(), "log store initialized");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified database file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().db_path(path).build();
        Self::open(config)
    }

    /// Create an in-memory store (for tests)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_connection(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Apply journal mode + schema, then ping
    fn initialize_connection(conn: &Connection) -> Result<()> {
        // Schema file carries the WAL pragma and the CREATE IF NOT EXISTS
        // statements; running it repeatedly is a no-op
        conn.execute_batch(SCHEMA_SQL)?;

        // Ping: cheapest possible round-trip through the engine
        let _: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;

        Ok(())
    }

    /// Append one record
    ///
    /// Steps:
    /// 1. Encode metadata to a JSON text blob (failure aborts the write;
    ///    no partial row is committed)
    /// 2. Insert one row, letting SQLite assign the id
    /// 3. Return the assigned id
    ///
    /// Each call is an independent atomic insert; concurrent callers are
    /// serialized by the connection lock.
    pub fn append(&self, record: &NewRecord) -> Result<i64> {
        // Step 1: Encode metadata before touching the database
        let metadata_json = serde_json::to_string(&record.metadata)
            .map_err(|e| ForgeError::Serialization(e.to_string()))?;

        // Store-assigned insertion time unless the caller supplied one
        let timestamp = record.timestamp.unwrap_or_else(Utc::now);

        // Step 2: Single atomic insert
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO logs (timestamp, level, message, source, hostname, environment, metadata)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                timestamp,
                record.level.as_str(),
                record.message,
                record.source,
                record.hostname,
                record.environment,
                metadata_json,
            ],
        )?;

        // Step 3: Hand the id back so callers can correlate
        let id = conn.last_insert_rowid();
        tracing::debug!(id, level = record.level.as_str(), "appended log record");

        Ok(id)
    }

    /// Read one page of records (zero-based page number)
    ///
    /// Returns up to [`PAGE_SIZE`] records at offset `page * PAGE_SIZE`,
    /// ordered by id ascending (insertion order, made explicit so the
    /// ordering stays stable while the table grows). A page past the end
    /// of the data is an empty vec, not an error.
    pub fn page(&self, page: u64) -> Result<Vec<LogRecord>> {
        // An offset outside i64 range is past any representable row id;
        // it must not reach SQLite, which reads a negative OFFSET as zero
        let offset = match i64::try_from(page.saturating_mul(PAGE_SIZE)) {
            Ok(offset) => offset,
            Err(_) => return Ok(Vec::new()),
        };

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, level, message, source, hostname, environment, metadata
             FROM logs ORDER BY id ASC LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![PAGE_SIZE as i64, offset], row_to_record)?;

        let mut records = Vec::with_capacity(PAGE_SIZE as usize);
        for row in rows {
            records.push(row?);
        }

        tracing::debug!(page, count = records.len(), "served log page");

        Ok(records)
    }

    /// Compute pagination totals from the current table cardinality
    ///
    /// Recomputed on every call; there is no snapshot isolation between
    /// this and a subsequent [`LogStore::page`] call (cardinality may move
    /// in between, which is acceptable for an append-mostly workload).
    pub fn pagination_info(&self) -> Result<PaginationInfo> {
        let conn = self.conn.lock();
        let total: i64 = conn.query_row("SELECT count(*) FROM logs", [], |row| row.get(0))?;

        Ok(PaginationInfo::for_total(total as u64))
    }
}

// =============================================================================
// Row Decoding
// =============================================================================

/// Map one row of the `logs` table to a [`LogRecord`]
///
/// The level column is guaranteed in-enumeration by the CHECK constraint,
/// so a parse failure here means the file was tampered with and surfaces
/// as a conversion error. Metadata is the opposite: historical rows must
/// stay readable, so a corrupt blob degrades to `{}`.
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<LogRecord> {
    let id: i64 = row.get(0)?;
    let level_str: String = row.get(2)?;
    let level: Level = level_str
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    let metadata_str: String = row.get(7)?;

    Ok(LogRecord {
        id,
        timestamp: row.get::<_, DateTime<Utc>>(1)?,
        level,
        message: row.get(3)?,
        source: row.get(4)?,
        hostname: row.get(5)?,
        environment: row.get(6)?,
        metadata: decode_metadata(id, &metadata_str),
    })
}

/// Decode a stored metadata blob, recovering to an empty mapping when the
/// text is malformed (lossy on corruption, never an error)
fn decode_metadata(id: i64, raw: &str) -> Metadata {
    if raw.is_empty() {
        return Metadata::new();
    }

    match serde_json::from_str(raw) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!(id, error = %e, "malformed metadata blob, substituting empty mapping");
            Metadata::new()
        }
    }
}
