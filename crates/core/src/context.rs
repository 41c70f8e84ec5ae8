//! Application composition root.
//!
//! Builds the process-lifetime service instances and hands them out as
//! shared handles. Nothing here is a global: tests construct their own
//! context (or individual services) and the embedding application keeps
//! one instance for the process.

use std::sync::Arc;

use finure_market_data::{AlphaVantageProvider, MarketDataProvider};

use crate::errors::{Error, Result};
use crate::stocks::{StockCachePolicy, StockService, StockServiceTrait};
use crate::watchlists::WatchlistStore;

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Process-lifetime service instances.
pub struct ServiceContext {
    pub stock_service: Arc<dyn StockServiceTrait>,
    pub watchlist_store: Arc<WatchlistStore>,
}

impl ServiceContext {
    /// Builds the context against the Alpha Vantage API.
    pub fn new(api_key: impl Into<String>) -> Self {
        let provider = Arc::new(AlphaVantageProvider::new(api_key.into()));
        Self::with_provider(provider, StockCachePolicy::default())
    }

    /// Builds the context over an arbitrary provider and cache policy.
    pub fn with_provider(
        provider: Arc<dyn MarketDataProvider>,
        policy: StockCachePolicy,
    ) -> Self {
        Self {
            stock_service: Arc::new(StockService::with_policy(provider, policy)),
            watchlist_store: Arc::new(WatchlistStore::new()),
        }
    }

    /// Builds the context from the `ALPHA_VANTAGE_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::MissingConfigKey(API_KEY_ENV.to_string()))?;
        Ok(Self::new(api_key))
    }
}
