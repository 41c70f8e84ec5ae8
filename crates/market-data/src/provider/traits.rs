//! Market data provider trait definitions.
//!
//! This module defines the `MarketDataProvider` trait that all quote-data
//! providers must implement. It is the seam the repository layer is written
//! against, and the seam tests mock.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, MarketMovers, SymbolMatch};

/// Trait for quote-data providers.
///
/// Implement this trait to add support for a new market data source.
/// All methods are request/response shaped: one remote round trip per call,
/// no retries, no fallback values.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ALPHA_VANTAGE".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the top gainers, losers, and most actively traded symbols
    /// for the current session.
    async fn top_movers(&self) -> Result<MarketMovers, MarketDataError>;

    /// Fetch company fundamentals for a symbol.
    async fn company_overview(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError>;

    /// Search for ticker symbols matching a keyword.
    ///
    /// An empty result list is a valid outcome, not an error.
    async fn search_symbols(&self, keywords: &str) -> Result<Vec<SymbolMatch>, MarketDataError>;
}
