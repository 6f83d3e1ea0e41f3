//! Upstream catalog providers.

mod traits;

pub mod coingecko;
pub mod coinmarketcap;

pub use coingecko::CoinGeckoProvider;
pub use coinmarketcap::CoinMarketCapProvider;
pub use traits::CatalogProvider;
