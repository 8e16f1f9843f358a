//! Pagination bookkeeping
//!
//! Derived from the current table cardinality on every request; nothing
//! here is stored or cached.

use serde::{Deserialize, Serialize};

use super::PAGE_SIZE;

/// Summary of how the record sequence divides into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total number of records currently in the store
    pub total_records: u64,

    /// Number of pages needed to cover every record
    /// (`ceil(total_records / page_size)`; 0 when the store is empty)
    pub total_pages: u64,

    /// Fixed page size the totals are computed against
    pub page_size: u64,
}

impl PaginationInfo {
    /// Compute the page breakdown for a given record count
    pub fn for_total(total_records: u64) -> Self {
        Self {
            total_records,
            total_pages: total_records.div_ceil(PAGE_SIZE),
            page_size: PAGE_SIZE,
        }
    }
}
