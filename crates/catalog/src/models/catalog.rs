//! The derived catalog dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// The merged coin catalog, derived once from both upstream listings and
/// read-only for the lifetime of a search session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    /// Merged entries, in CoinMarketCap listing order
    pub entries: Vec<CatalogEntry>,

    /// When the derivation ran
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    /// Create a catalog stamped with the current time.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            fetched_at: Utc::now(),
        }
    }

    /// Number of merged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that were cross-referenced to a CoinGecko id.
    pub fn matched_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.coin_gecko_id.is_some())
            .count()
    }
}
