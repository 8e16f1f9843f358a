//! Record Model Module
//!
//! Canonical shape of a log entry and the default-substitution policy
//! applied to partially-filled input before it reaches storage.
//!
//! ## Responsibilities
//! - Fixed severity enumeration (TRACE..FATAL)
//! - Stored record shape ([`LogRecord`]) and normalized input ([`NewRecord`])
//! - Boundary normalization: [`RecordDraft::normalize`] is the only place
//!   defaults are filled in and validation happens, so the store only ever
//!   receives fully-populated records
//!
//! ## Default Substitution Rules
//! ```text
//! level       (absent/empty) → INFO
//! source      (absent/empty) → "unknown"
//! hostname    (absent/empty) → "unknown"
//! environment (absent/empty) → "development"
//! metadata    (absent)       → {}
//! message     (absent/empty) → validation error
//! ```

mod level;
mod entry;
mod draft;

pub use level::{Level, ParseLevelError};
pub use entry::{LogRecord, Metadata, NewRecord};
pub use draft::RecordDraft;
