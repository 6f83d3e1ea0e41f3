//! CoinMarketCap catalog provider implementation.
//!
//! Fetches the full coin map from the `/v1/cryptocurrency/map` endpoint.
//! Requires an API key sent via the `X-CMC_PRO_API_KEY` header. Errors are
//! reported both as HTTP statuses and inside the JSON `status` envelope.
//! API documentation: https://coinmarketcap.com/api/documentation/v1/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::CatalogError;
use crate::models::CoinListing;
use crate::provider::CatalogProvider;

const BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1";
const PROVIDER_ID: &str = "COINMARKETCAP";

/// Response from the `/cryptocurrency/map` endpoint.
#[derive(Debug, Deserialize)]
struct MapResponse {
    /// Listed coins; absent on error responses
    #[serde(default)]
    data: Vec<MapItem>,
}

/// One item of the coin map.
#[derive(Debug, Deserialize)]
struct MapItem {
    /// Numeric CMC id (e.g., 1 for Bitcoin)
    id: i64,
    /// Display name (e.g., "Bitcoin")
    #[serde(default)]
    name: String,
    /// Ticker symbol (e.g., "BTC")
    #[serde(default)]
    symbol: String,
    // Note: slug, rank, is_active and platform fields exist but are not used
}

/// The `status` envelope CMC wraps every response in.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    error_code: Option<i64>,
    error_message: Option<String>,
}

/// CoinMarketCap catalog provider.
pub struct CoinMarketCapProvider {
    client: Client,
    api_key: String,
}

impl CoinMarketCapProvider {
    /// Create a new CoinMarketCap provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Extract the error message CMC embeds in its `status` envelope, if any.
    fn envelope_error(body: &str) -> Option<String> {
        let envelope: StatusEnvelope = serde_json::from_str(body).ok()?;
        let status = envelope.status?;
        if status.error_code.unwrap_or(0) != 0 {
            status.error_message
        } else {
            None
        }
    }

    async fn fetch_map(&self) -> Result<Vec<CoinListing>, CatalogError> {
        let url = format!("{}/cryptocurrency/map", BASE_URL);

        let response = self
            .client
            .get(&url)
            .header("X-CMC_PRO_API_KEY", &self.api_key)
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

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Invalid or missing API key".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Some(message) = Self::envelope_error(&body) {
                return Err(CatalogError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message,
                });
            }

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

        let response: MapResponse =
            serde_json::from_str(&text).map_err(|e| CatalogError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse coin map: {}", e),
            })?;

        let listings: Vec<CoinListing> = response
            .data
            .into_iter()
            .map(|item| CoinListing {
                id: item.id.to_string(),
                name: item.name,
                symbol: item.symbol,
            })
            .collect();

        debug!("CoinMarketCap: fetched {} listings", listings.len());

        Ok(listings)
    }
}

#[async_trait]
impl CatalogProvider for CoinMarketCapProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_listings(&self) -> Result<Vec<CoinListing>, CatalogError> {
        debug!("Fetching coin map from CoinMarketCap");
        self.fetch_map().await
    }
}
