//! CoinGecko catalog provider implementation.
//!
//! Fetches the full coin listing from the public `/coins/list` endpoint.
//! No authentication is required; the public API is rate limited by IP.
//! API documentation: https://docs.coingecko.com/reference/coins-list

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::CatalogError;
use crate::models::CoinListing;
use crate::provider::CatalogProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

/// One item of the `/coins/list` response.
///
/// `symbol` and `name` are occasionally absent for delisted coins; they
/// default to empty strings rather than failing the fetch.
#[derive(Debug, Deserialize)]
struct ListItem {
    /// Slug id (e.g., "bitcoin")
    id: String,
    /// Ticker symbol (e.g., "btc")
    #[serde(default)]
    symbol: String,
    /// Display name (e.g., "Bitcoin")
    #[serde(default)]
    name: String,
}

/// CoinGecko catalog provider.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    /// Create a new CoinGecko provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_list(&self) -> Result<Vec<CoinListing>, CatalogError> {
        let url = format!("{}/coins/list?include_platform=false", BASE_URL);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    CatalogError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        let items: Vec<ListItem> =
            serde_json::from_str(&text).map_err(|e| CatalogError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse coin list: {}", e),
            })?;

        let listings: Vec<CoinListing> = items
            .into_iter()
            .map(|item| CoinListing {
                id: item.id,
                name: item.name,
                symbol: item.symbol,
            })
            .collect();

        debug!("CoinGecko: fetched {} listings", listings.len());

        Ok(listings)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_listings(&self) -> Result<Vec<CoinListing>, CatalogError> {
        debug!("Fetching coin list from CoinGecko");
        self.fetch_list().await
    }
}
