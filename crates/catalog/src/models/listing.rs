//! Upstream coin listing records.

use serde::{Deserialize, Serialize};

/// A single coin record as delivered by an upstream catalog provider.
///
/// Both providers share this shape: CoinMarketCap ids are numeric on the
/// wire and carried here as strings; CoinGecko ids are slugs. `name` and
/// `symbol` default to empty strings when a provider omits them, so a
/// malformed record degrades to "matches almost nothing" instead of failing
/// the whole fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinListing {
    /// Provider-specific identifier (e.g., "1" for CMC, "bitcoin" for CoinGecko)
    pub id: String,

    /// Display name (e.g., "Bitcoin")
    #[serde(default)]
    pub name: String,

    /// Ticker symbol (e.g., "BTC")
    #[serde(default)]
    pub symbol: String,
}

impl CoinListing {
    /// Create a new listing with all fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let listing: CoinListing = serde_json::from_str(r#"{"id": "bitcoin"}"#).unwrap();
        assert_eq!(listing.id, "bitcoin");
        assert_eq!(listing.name, "");
        assert_eq!(listing.symbol, "");
    }

    #[test]
    fn test_full_record_parses() {
        let listing: CoinListing =
            serde_json::from_str(r#"{"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"}"#)
                .unwrap();
        assert_eq!(listing, CoinListing::new("bitcoin", "Bitcoin", "btc"));
    }
}
