//! Catalog derivation service.
//!
//! Issues both provider fetches concurrently, joins them, and runs the
//! reconciler once. Either fetch failing is fatal to the whole derivation;
//! no partial merge is produced.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::CatalogError;
use crate::matching::MatchPolicy;
use crate::models::Catalog;
use crate::provider::CatalogProvider;
use crate::reconcile::reconcile;

/// Derives the merged coin catalog from the two upstream providers.
pub struct CatalogService {
    coin_market_cap: Arc<dyn CatalogProvider>,
    coin_gecko: Arc<dyn CatalogProvider>,
    policy: MatchPolicy,
}

impl CatalogService {
    /// Create a service with the default match policy.
    pub fn new(coin_market_cap: Arc<dyn CatalogProvider>, coin_gecko: Arc<dyn CatalogProvider>) -> Self {
        Self::with_policy(coin_market_cap, coin_gecko, MatchPolicy::default())
    }

    /// Create a service with an explicit match policy.
    pub fn with_policy(
        coin_market_cap: Arc<dyn CatalogProvider>,
        coin_gecko: Arc<dyn CatalogProvider>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            coin_market_cap,
            coin_gecko,
            policy,
        }
    }

    /// Fetch both listings, reconcile them, and return the merged catalog.
    ///
    /// The fetches run concurrently and are joined before reconciliation
    /// begins. If either fails, the error is surfaced as
    /// [`CatalogError::DataUnavailable`] naming the failed provider.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        info!(
            "Loading catalog from {} and {}",
            self.coin_market_cap.id(),
            self.coin_gecko.id()
        );

        let (cmc_result, gecko_result) = tokio::join!(
            self.coin_market_cap.fetch_listings(),
            self.coin_gecko.fetch_listings()
        );

        let cmc_listings = cmc_result.map_err(|e| {
            warn!("{} fetch failed: {}", self.coin_market_cap.id(), e);
            CatalogError::data_unavailable(self.coin_market_cap.id(), e)
        })?;
        let gecko_listings = gecko_result.map_err(|e| {
            warn!("{} fetch failed: {}", self.coin_gecko.id(), e);
            CatalogError::data_unavailable(self.coin_gecko.id(), e)
        })?;

        let entries = reconcile(&cmc_listings, &gecko_listings, self.policy);
        let catalog = Catalog::new(entries);

        info!(
            "Catalog ready: {} entries, {} cross-referenced",
            catalog.len(),
            catalog.matched_count()
        );

        Ok(catalog)
    }
}
