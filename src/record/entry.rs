//! Log record shapes
//!
//! [`LogRecord`] is what the store hands back; [`NewRecord`] is the
//! fully-normalized input it accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Level;

/// Open-ended string-keyed mapping to arbitrary JSON values.
///
/// Kept dynamic in memory; encoded to a TEXT blob only at the storage
/// boundary and decoded lazily on read.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One stored log event, as read back from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Monotonically increasing row id, assigned by the store on insert
    pub id: i64,

    /// Event time (UTC); insertion time unless the caller supplied one
    pub timestamp: DateTime<Utc>,

    /// Severity, guaranteed in-enumeration once stored
    pub level: Level,

    /// Log message text
    pub message: String,

    /// Emitting component or service
    pub source: String,

    /// Machine the event originated on
    pub hostname: String,

    /// Deployment environment (e.g. "development", "production")
    pub environment: String,

    /// Free-form structured context; `{}` if absent or unreadable
    pub metadata: Metadata,
}

/// A fully-normalized record ready for [`LogStore::append`].
///
/// Produced by [`RecordDraft::normalize`]; every defaultable field is
/// already populated, so the store does no substitution of its own.
///
/// [`LogStore::append`]: crate::store::LogStore::append
/// [`RecordDraft::normalize`]: crate::record::RecordDraft::normalize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    /// Caller-supplied event time; the store uses insertion time when `None`
    pub timestamp: Option<DateTime<Utc>>,

    pub level: Level,
    pub message: String,
    pub source: String,
    pub hostname: String,
    pub environment: String,
    pub metadata: Metadata,
}

impl NewRecord {
    /// Shorthand for a record with the given level and message and every
    /// contextual field at its default
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            level,
            message: message.into(),
            source: "unknown".to_string(),
            hostname: "unknown".to_string(),
            environment: "development".to_string(),
            metadata: Metadata::new(),
        }
    }

    /// Attach metadata (builder-style)
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
