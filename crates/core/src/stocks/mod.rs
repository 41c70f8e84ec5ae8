//! Stocks module - the cache-then-fetch repository over the market data
//! provider.

mod stocks_service;
mod stocks_traits;

#[cfg(test)]
mod stocks_service_tests;

pub use stocks_service::{StockCachePolicy, StockService};
pub use stocks_traits::StockServiceTrait;
