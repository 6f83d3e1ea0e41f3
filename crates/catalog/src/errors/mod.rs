//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while fetching or deriving the coin catalog.
///
/// Per-record defects are never errors: a listing with missing fields is
/// normalized to empty strings, and an unmatched listing is represented as
/// `coin_gecko_id = None` in the merged catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The provider rate limited the request (HTTP 429 or quota exhaustion).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred: auth failure, unexpected status,
    /// or an unparseable payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// One of the two source fetches failed, so no merged catalog is
    /// produced. Fatal to the whole derivation; no partial merge is
    /// attempted.
    #[error("Catalog data unavailable: {provider}: {message}")]
    DataUnavailable {
        /// The provider whose fetch failed
        provider: String,
        /// The underlying failure
        message: String,
    },
}

impl CatalogError {
    /// Wrap a provider fetch failure into the fatal derivation error.
    pub fn data_unavailable(provider: &str, source: CatalogError) -> Self {
        Self::DataUnavailable {
            provider: provider.to_string(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CatalogError::RateLimited {
            provider: "COINGECKO".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: COINGECKO");

        let error = CatalogError::ProviderError {
            provider: "COINMARKETCAP".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: COINMARKETCAP - API key invalid"
        );
    }

    #[test]
    fn test_data_unavailable_names_failed_provider() {
        let inner = CatalogError::Timeout {
            provider: "COINGECKO".to_string(),
        };
        let error = CatalogError::data_unavailable("COINGECKO", inner);

        match &error {
            CatalogError::DataUnavailable { provider, message } => {
                assert_eq!(provider, "COINGECKO");
                assert!(message.contains("Timeout"));
            }
            other => panic!("Expected DataUnavailable, got {:?}", other),
        }
        assert_eq!(
            format!("{}", error),
            "Catalog data unavailable: COINGECKO: Timeout: COINGECKO"
        );
    }
}
