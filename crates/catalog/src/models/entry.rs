//! Merged catalog records.

use serde::{Deserialize, Serialize};

/// One record of the merged catalog: a CoinMarketCap listing annotated with
/// the best-matching CoinGecko id, if any.
///
/// The reconciler produces exactly one entry per CoinMarketCap listing, in
/// the original listing order. `coin_gecko_id` is `None` when no CoinGecko
/// record matched; that is a valid result, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// CoinMarketCap id, always present (CMC is the driving list)
    pub coin_market_cap_id: String,

    /// CoinGecko id of the matched record, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_gecko_id: Option<String>,
}
