//! Cache-then-fetch repository for stock queries.
//!
//! For each logical query the service derives a deterministic cache key,
//! serves a fresh cached value when one exists, and otherwise fetches from
//! the provider and populates the cache. Remote failures propagate to the
//! caller unchanged: no retry, no fallback value.
//!
//! Concurrent misses on the same key may issue duplicate remote requests;
//! there is no single-flight de-duplication per key.

use async_trait::async_trait;
use chrono::Duration;
use log::debug;
use std::future::Future;
use std::sync::Arc;

use finure_market_data::{CompanyProfile, MarketDataProvider, MarketMovers, SymbolMatch};

use crate::cache::ExpiringCache;
use crate::constants::{
    DEFAULT_CACHE_TTL_MINUTES, MOVERS_CACHE_KEY, OVERVIEW_CACHE_PREFIX, SEARCH_CACHE_PREFIX,
};
use crate::errors::{Error, Result};

use super::stocks_traits::StockServiceTrait;

/// Freshness windows per query type.
///
/// TTLs are supplied at read time, so each query type can carry its own
/// tolerance over the same cache machinery.
#[derive(Clone, Copy, Debug)]
pub struct StockCachePolicy {
    /// Freshness window for the top-movers query
    pub movers_ttl: Duration,

    /// Freshness window for overview-by-symbol queries
    pub overview_ttl: Duration,

    /// Freshness window for search-by-keyword queries
    pub search_ttl: Duration,
}

impl Default for StockCachePolicy {
    fn default() -> Self {
        let ttl = Duration::minutes(DEFAULT_CACHE_TTL_MINUTES);
        Self {
            movers_ttl: ttl,
            overview_ttl: ttl,
            search_ttl: ttl,
        }
    }
}

/// Repository for stock queries, composing the provider with in-memory
/// caching to reduce redundant API usage.
pub struct StockService {
    provider: Arc<dyn MarketDataProvider>,
    policy: StockCachePolicy,
    movers_cache: ExpiringCache<MarketMovers>,
    profile_cache: ExpiringCache<CompanyProfile>,
    search_cache: ExpiringCache<Vec<SymbolMatch>>,
}

impl StockService {
    /// Create a service with the default cache policy.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_policy(provider, StockCachePolicy::default())
    }

    /// Create a service with an explicit cache policy.
    pub fn with_policy(provider: Arc<dyn MarketDataProvider>, policy: StockCachePolicy) -> Self {
        Self {
            provider,
            policy,
            movers_cache: ExpiringCache::new(),
            profile_cache: ExpiringCache::new(),
            search_cache: ExpiringCache::new(),
        }
    }

    fn overview_key(symbol: &str) -> String {
        format!("{}{}", OVERVIEW_CACHE_PREFIX, symbol)
    }

    fn search_key(keyword: &str) -> String {
        format!("{}{}", SEARCH_CACHE_PREFIX, keyword)
    }
}

/// Runs the fetch-and-populate step on its own task.
///
/// The cache write lands even when the calling scope is cancelled
/// mid-flight; the abandoned caller simply never sees the result.
async fn run_detached<T>(fut: impl Future<Output = Result<T>> + Send + 'static) -> Result<T>
where
    T: Send + 'static,
{
    tokio::spawn(fut)
        .await
        .map_err(|e| Error::Unexpected(format!("fetch task failed: {}", e)))?
}

#[async_trait]
impl StockServiceTrait for StockService {
    async fn top_movers(&self) -> Result<MarketMovers> {
        if let Some(hit) = self.movers_cache.get(MOVERS_CACHE_KEY, self.policy.movers_ttl) {
            debug!("top movers served from cache");
            return Ok(hit);
        }

        let provider = Arc::clone(&self.provider);
        let cache = self.movers_cache.clone();
        run_detached(async move {
            let movers = provider.top_movers().await?;
            cache.put(MOVERS_CACHE_KEY, movers.clone());
            Ok(movers)
        })
        .await
    }

    async fn company_overview(&self, symbol: &str) -> Result<CompanyProfile> {
        let key = Self::overview_key(symbol);
        if let Some(hit) = self.profile_cache.get(&key, self.policy.overview_ttl) {
            debug!("company overview for {} served from cache", symbol);
            return Ok(hit);
        }

        let provider = Arc::clone(&self.provider);
        let cache = self.profile_cache.clone();
        let symbol = symbol.to_string();
        run_detached(async move {
            let profile = provider.company_overview(&symbol).await?;
            cache.put(key, profile.clone());
            Ok(profile)
        })
        .await
    }

    async fn search_ticker(&self, keyword: &str) -> Result<Vec<SymbolMatch>> {
        let key = Self::search_key(keyword);
        if let Some(hit) = self.search_cache.get(&key, self.policy.search_ttl) {
            debug!("search for {:?} served from cache", keyword);
            return Ok(hit);
        }

        let provider = Arc::clone(&self.provider);
        let cache = self.search_cache.clone();
        let keyword = keyword.to_string();
        run_detached(async move {
            let matches = provider.search_symbols(&keyword).await?;
            cache.put(key, matches.clone());
            Ok(matches)
        })
        .await
    }

    fn clear_cache(&self) {
        self.movers_cache.clear_all();
        self.profile_cache.clear_all();
        self.search_cache.clear_all();
    }
}
