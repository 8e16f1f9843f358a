//! Record normalization
//!
//! [`RecordDraft`] is the raw boundary input (every field optional, as it
//! arrives off the wire); [`RecordDraft::normalize`] turns it into a
//! [`NewRecord`] with every defaultable field populated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

use super::{Level, Metadata, NewRecord};

/// A possibly-partial log entry as submitted by a client.
///
/// Deserializable straight from a request body; `normalize` is the only
/// validation and default-substitution step in the system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordDraft {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Severity token, matched case-insensitively ("error", "ERROR", ...)
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl RecordDraft {
    /// Apply the default-substitution rules and produce a record ready for
    /// the store.
    ///
    /// Pure function. Fails only at the boundary:
    /// - missing or empty `message`
    /// - a non-empty `level` token outside the fixed enumeration
    ///
    /// Absent or empty `level` defaults to `INFO`; `source` and `hostname`
    /// default to `"unknown"`, `environment` to `"development"`, and
    /// `metadata` to an empty mapping.
    pub fn normalize(self) -> Result<NewRecord> {
        // Message is the one required field
        let message = match self.message {
            Some(m) if !m.is_empty() => m,
            _ => return Err(ForgeError::Validation("message is required".to_string())),
        };

        // Absent/empty level falls back to INFO; a bad non-empty token is
        // rejected here rather than bounced off the store's CHECK constraint
        let level = match self.level.as_deref() {
            None | Some("") => Level::default(),
            Some(token) => token
                .parse::<Level>()
                .map_err(|e| ForgeError::Validation(e.to_string()))?,
        };

        Ok(NewRecord {
            timestamp: self.timestamp,
            level,
            message,
            source: non_empty_or(self.source, "unknown"),
            hostname: non_empty_or(self.hostname, "unknown"),
            environment: non_empty_or(self.environment, "development"),
            metadata: self.metadata.unwrap_or_default(),
        })
    }
}

/// Treat `None` and `""` the same way: fall back to the default
fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}
