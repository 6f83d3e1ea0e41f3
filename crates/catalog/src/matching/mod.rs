//! String normalization and the match primitive.
//!
//! Everything that decides "do these two strings refer to the same asset"
//! lives here, so reconciliation and query-time exact-match highlighting
//! share one definition.

use crate::models::CoinListing;

/// Canonicalize a string for comparison: lower-case it and strip every
/// non-alphanumeric character.
///
/// Deterministic and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Symmetric containment match: true iff either normalized string contains
/// the other as a substring.
///
/// Empty-string policy: a string that normalizes to empty matches only
/// another empty-normalizing string. Without this rule an empty key would
/// contain-match every record in the catalog.
pub fn is_match(a: &str, b: &str) -> bool {
    normalized_match(&normalize(a), &normalize(b))
}

/// The containment check over already-normalized inputs.
///
/// Split out so the reconciler can normalize each key once up front instead
/// of on every pairwise comparison.
pub(crate) fn normalized_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    a.contains(b) || b.contains(a)
}

/// The reconciler's composite-key strategy.
///
/// The observed upstream behavior exists in two variants: matching on the
/// concatenated `symbol + name`, and matching on the symbol alone. The
/// policy is explicit rather than baked in; `SymbolAndName` is the default
/// and the canonical behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Key is `symbol + name` (default)
    #[default]
    SymbolAndName,
    /// Key is the symbol alone
    SymbolOnly,
}

impl MatchPolicy {
    /// Build the comparison key for a listing under this policy.
    pub fn key(&self, listing: &CoinListing) -> String {
        match self {
            Self::SymbolAndName => format!("{}{}", listing.symbol, listing.name),
            Self::SymbolOnly => listing.symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips() {
        assert_eq!(normalize("Bitcoin Cash"), "bitcoincash");
        assert_eq!(normalize("BTC"), "btc");
        assert_eq!(normalize("wrapped-bitcoin"), "wrappedbitcoin");
        assert_eq!(normalize("USD//C"), "usdc");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Bitcoin", "ETH 2.0", "  doge  ", "!!!", ""] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_normalize_strips_to_empty() {
        assert_eq!(normalize("!@# $%"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_is_match_symmetric_containment() {
        assert!(is_match("Bitcoin", "bitcoin"));
        assert!(is_match("bit", "Bitcoin"));
        assert!(is_match("Bitcoin", "bit"));
        assert!(!is_match("Bitcoin", "Ethereum"));
    }

    #[test]
    fn test_is_match_is_symmetric() {
        let cases = [
            ("Bitcoin", "bitcoin-cash"),
            ("BTC", "btc"),
            ("eth", "Ethereum"),
            ("", "Bitcoin"),
            ("", ""),
        ];
        for (a, b) in cases {
            assert_eq!(is_match(a, b), is_match(b, a), "asymmetric for {:?}", (a, b));
        }
    }

    #[test]
    fn test_is_match_ignores_punctuation_and_case() {
        assert!(is_match("bitcoin-cash", "Bitcoin Cash"));
        assert!(is_match("BTCBitcoin", "btc bitcoin"));
    }

    #[test]
    fn test_empty_matches_empty_only() {
        assert!(is_match("", ""));
        assert!(is_match("!!!", "..."));
        assert!(!is_match("", "Bitcoin"));
        assert!(!is_match("Bitcoin", "!!!"));
    }

    #[test]
    fn test_policy_keys() {
        let listing = CoinListing::new("1", "Bitcoin", "BTC");
        assert_eq!(MatchPolicy::SymbolAndName.key(&listing), "BTCBitcoin");
        assert_eq!(MatchPolicy::SymbolOnly.key(&listing), "BTC");
    }

    #[test]
    fn test_default_policy_is_symbol_and_name() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::SymbolAndName);
    }
}
