//! # LogForge
//!
//! A durable log storage core backed by SQLite, with:
//! - WAL journaling for single-writer/multi-reader concurrency
//! - Normalized record model with default substitution
//! - Offset-paginated retrieval with stable insertion ordering
//! - Free-form JSON metadata with lossy-on-corruption decoding
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Caller (HTTP layer / CLI)                  │
//! │       parse input → Normalize → Append / Page / Info        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Record Model                            │
//! │         (RecordDraft → normalize → NewRecord)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Log Store                              │
//! │    append / page / pagination_info over one connection      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!               ┌───────▼───────┐
//!               │    SQLite     │
//!               │  (WAL mode)   │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ForgeError, Result};
pub use config::Config;
pub use record::{Level, LogRecord, Metadata, NewRecord, RecordDraft};
pub use store::{LogStore, PaginationInfo, PAGE_SIZE};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LogForge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
