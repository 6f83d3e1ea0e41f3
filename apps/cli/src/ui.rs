//! Terminal rendering for search results.
//!
//! Pure string builders so the output is testable; main() only prints.

use std::fmt::Write;

use coinfinder_catalog::{SearchHit, MIN_QUERY_LEN};

/// Advisory for queries too short to search. Owned by the presentation
/// layer; the core treats short queries as a quiet empty state.
pub fn advisory(query: &str) -> Option<String> {
    let len = query.chars().count();
    if len > 0 && len < MIN_QUERY_LEN {
        Some("Please enter at least 3 characters to search.".to_string())
    } else {
        None
    }
}

/// Render the published result list for the current query.
pub fn render(query: &str, hits: &[SearchHit]) -> String {
    if query.chars().count() < MIN_QUERY_LEN {
        return String::new();
    }

    if hits.is_empty() {
        return format!("No results found for \"{}\".\n", query);
    }

    let mut out = String::new();
    for hit in hits {
        let marker = if hit.exact { "  [match]" } else { "" };
        let _ = writeln!(out, "{} ({}){}", hit.entry.name, hit.entry.symbol, marker);
        let _ = writeln!(
            out,
            "  CoinGecko ID:      {}",
            hit.entry.coin_gecko_id.as_deref().unwrap_or("-")
        );
        let _ = writeln!(out, "  CoinMarketCap ID:  {}", hit.entry.coin_market_cap_id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinfinder_catalog::CatalogEntry;

    fn hit(name: &str, symbol: &str, cmc: &str, gecko: Option<&str>, exact: bool) -> SearchHit {
        SearchHit {
            entry: CatalogEntry {
                name: name.to_string(),
                symbol: symbol.to_string(),
                coin_market_cap_id: cmc.to_string(),
                coin_gecko_id: gecko.map(str::to_string),
            },
            exact,
        }
    }

    #[test]
    fn test_advisory_only_for_short_nonempty_queries() {
        assert!(advisory("").is_none());
        assert!(advisory("bt").is_some());
        assert!(advisory("btc").is_none());
    }

    #[test]
    fn test_render_empty_query_is_silent() {
        assert_eq!(render("", &[]), "");
        assert_eq!(render("bt", &[]), "");
    }

    #[test]
    fn test_render_no_results_message() {
        assert_eq!(
            render("zzz", &[]),
            "No results found for \"zzz\".\n"
        );
    }

    #[test]
    fn test_render_hits_with_ids_and_marker() {
        let hits = vec![
            hit("Bitcoin", "BTC", "1", Some("bitcoin"), true),
            hit("Bitcoin Cash", "BCH", "1831", None, false),
        ];
        let out = render("bitcoin", &hits);

        assert!(out.contains("Bitcoin (BTC)  [match]"));
        assert!(out.contains("CoinGecko ID:      bitcoin"));
        assert!(out.contains("CoinMarketCap ID:  1\n"));
        assert!(out.contains("Bitcoin Cash (BCH)\n"));
        assert!(out.contains("CoinGecko ID:      -"));
    }
}
