//! Record reconciliation: cross-referencing the two upstream catalogs.

use tracing::debug;

use crate::matching::{normalize, normalized_match, MatchPolicy};
use crate::models::{CatalogEntry, CoinListing};

/// Merge the two upstream listings into a single catalog.
///
/// CoinMarketCap is the driving list: the output has exactly one entry per
/// CMC listing, in the same order. For each CMC listing the CoinGecko list
/// is scanned in its original order and the **first** record whose policy
/// key matches wins; there is no scoring. Unmatched entries carry
/// `coin_gecko_id = None`.
///
/// Keys are normalized once per input record up front; the scan itself is
/// the naive O(N_A x N_B) containment sweep, which keeps the
/// first-match-in-original-order semantics exact.
pub fn reconcile(
    coin_market_cap: &[CoinListing],
    coin_gecko: &[CoinListing],
    policy: MatchPolicy,
) -> Vec<CatalogEntry> {
    let gecko_keys: Vec<String> = coin_gecko
        .iter()
        .map(|listing| normalize(&policy.key(listing)))
        .collect();

    let entries: Vec<CatalogEntry> = coin_market_cap
        .iter()
        .map(|listing| {
            let key = normalize(&policy.key(listing));
            let coin_gecko_id = gecko_keys
                .iter()
                .position(|gecko_key| normalized_match(gecko_key, &key))
                .map(|i| coin_gecko[i].id.clone());

            CatalogEntry {
                name: listing.name.clone(),
                symbol: listing.symbol.clone(),
                coin_market_cap_id: listing.id.clone(),
                coin_gecko_id,
            }
        })
        .collect();

    let matched = entries.iter().filter(|e| e.coin_gecko_id.is_some()).count();
    debug!(
        "Reconciled {} CoinMarketCap listings against {} CoinGecko listings: {} matched",
        coin_market_cap.len(),
        coin_gecko.len(),
        matched
    );

    entries
}
