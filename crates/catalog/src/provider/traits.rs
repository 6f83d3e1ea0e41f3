//! Catalog provider trait definition.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::models::CoinListing;

/// Trait for upstream coin-catalog providers.
///
/// Implement this trait to add support for a new listing source. The
/// catalog service only needs the full listing in one shot; pagination,
/// authentication headers, and payload shapes are the implementor's concern.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO" or "COINMARKETCAP".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the provider's complete coin listing.
    ///
    /// Returns the listings in the provider's own order, or a
    /// `CatalogError` on failure. A fetch failure is fatal to catalog
    /// derivation; providers should not return partial lists.
    async fn fetch_listings(&self) -> Result<Vec<CoinListing>, CatalogError>;
}
