//! Interactive catalog search.
//!
//! - `filter` - the pure query filter (visibility + exact-match flags)
//! - `session` - the debounced re-evaluation driver

mod filter;
mod session;

pub use filter::{search, SearchHit, MIN_QUERY_LEN};
pub use session::{SearchSession, DEBOUNCE_DURATION};
