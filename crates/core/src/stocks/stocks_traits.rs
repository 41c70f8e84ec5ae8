use async_trait::async_trait;

use finure_market_data::{CompanyProfile, MarketMovers, SymbolMatch};

use crate::errors::Result;

/// Service interface for stock queries.
///
/// Presentation state holders are written against this trait so they can
/// be tested with a stub service.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    /// Top gainers, losers, and most actively traded symbols.
    async fn top_movers(&self) -> Result<MarketMovers>;

    /// Company fundamentals for a symbol.
    async fn company_overview(&self, symbol: &str) -> Result<CompanyProfile>;

    /// Ticker search by keyword.
    async fn search_ticker(&self, keyword: &str) -> Result<Vec<SymbolMatch>>;

    /// Drops every cached response.
    fn clear_cache(&self);
}
