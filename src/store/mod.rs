//! Log Store Module
//!
//! Durable append and paginated retrieval of log records over SQLite.
//!
//! ## Responsibilities
//! - Open/create the database file and apply the idempotent schema
//! - WAL journaling (single writer, concurrent readers)
//! - Atomic single-row appends with metadata encoded as JSON text
//! - Offset-paginated reads in insertion order with per-row decode recovery
//! - Pagination bookkeeping recomputed from table cardinality on demand
//!
//! ## Durable Layout (external contract)
//! ```text
//! logs
//! ├── id           INTEGER PRIMARY KEY AUTOINCREMENT
//! ├── timestamp    DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
//! ├── level        TEXT NOT NULL DEFAULT 'INFO'  CHECK(level IN (...))
//! ├── message      TEXT NOT NULL
//! ├── source       TEXT DEFAULT 'unknown'
//! ├── hostname     TEXT DEFAULT 'localhost'
//! ├── environment  TEXT DEFAULT 'development'
//! └── metadata     TEXT DEFAULT '{}'
//! ```
//! Secondary indexes on `timestamp`, `level`, `source`, `hostname`,
//! `environment`, and the composite `(level, timestamp)` support the
//! filter-then-scan access pattern of downstream readers.

mod sqlite;
mod pagination;

pub use sqlite::LogStore;
pub use pagination::PaginationInfo;

/// Fixed number of records per page
pub const PAGE_SIZE: u64 = 100;
