//! The pure query filter over the merged catalog.

use crate::matching::{is_match, normalize};
use crate::models::CatalogEntry;

/// Queries shorter than this yield an empty result. A policy, not an error;
/// the presentation layer owns the advisory message.
pub const MIN_QUERY_LEN: usize = 3;

/// One visible record plus its exact-match flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// The matching catalog entry
    pub entry: CatalogEntry,
    /// True when the entry's name or symbol satisfies the symmetric
    /// containment match against the query (distinct from mere inclusion)
    pub exact: bool,
}

/// Filter the catalog against a query.
///
/// Visibility uses one-directional containment: an entry is included iff its
/// normalized name or normalized symbol contains the normalized query. The
/// exact flag uses the looser symmetric-containment primitive on name and
/// symbol separately; the two predicates are deliberately distinct.
///
/// Output preserves catalog order; there is no re-sorting and no relevance
/// ranking. Empty and sub-minimum-length queries return an empty set, as
/// does a query that normalizes to empty (an all-punctuation query must not
/// match the whole catalog).
pub fn search(entries: &[CatalogEntry], query: &str) -> Vec<SearchHit> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| {
            normalize(&entry.name).contains(&needle) || normalize(&entry.symbol).contains(&needle)
        })
        .map(|entry| SearchHit {
            exact: is_match(&entry.name, query) || is_match(&entry.symbol, query),
            entry: entry.clone(),
        })
        .collect()
}
