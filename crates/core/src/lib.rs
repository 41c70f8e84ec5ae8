//! Finure Core - services, stores, and presentation state holders.
//!
//! This crate contains the application logic for Finure: the expiring
//! response cache, the stock repository composed over a market data
//! provider, the reactive watchlist store, and the per-screen state
//! holders the UI layer subscribes to. UI rendering lives elsewhere.

pub mod cache;
pub mod constants;
pub mod context;
pub mod errors;
pub mod stocks;
pub mod viewmodels;
pub mod watchlists;

// Re-export common types
pub use cache::{CacheEntry, ExpiringCache};
pub use context::ServiceContext;
pub use stocks::{StockCachePolicy, StockService, StockServiceTrait};
pub use watchlists::{Watchlist, WatchlistStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
