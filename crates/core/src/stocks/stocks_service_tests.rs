//! Tests for the StockService cache-then-fetch contract.
//!
//! The provider is stubbed with call counters so cache hits and misses are
//! observable from the outside.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use finure_market_data::{
        CompanyProfile, MarketDataError, MarketDataProvider, MarketMovers, SymbolMatch,
        TickerQuote,
    };

    use crate::stocks::{StockCachePolicy, StockService, StockServiceTrait};

    #[derive(Default)]
    struct StubProvider {
        movers_calls: AtomicUsize,
        overview_calls: AtomicUsize,
        search_calls: AtomicUsize,
        fail: AtomicBool,
        delay_ms: u64,
    }

    impl StubProvider {
        fn new() -> Self {
            Self::default()
        }

        fn with_delay(delay_ms: u64) -> Self {
            Self {
                delay_ms,
                ..Self::default()
            }
        }

        fn set_fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn check_fail(&self) -> Result<(), MarketDataError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(MarketDataError::ProviderError {
                    provider: "STUB".to_string(),
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }

        async fn delay(&self) {
            if self.delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn top_movers(&self) -> Result<MarketMovers, MarketDataError> {
            self.movers_calls.fetch_add(1, Ordering::SeqCst);
            self.delay().await;
            self.check_fail()?;
            Ok(MarketMovers {
                top_gainers: vec![TickerQuote {
                    ticker: "AAPL".to_string(),
                    price: "150.25".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }

        async fn company_overview(
            &self,
            symbol: &str,
        ) -> Result<CompanyProfile, MarketDataError> {
            self.overview_calls.fetch_add(1, Ordering::SeqCst);
            self.delay().await;
            self.check_fail()?;
            Ok(CompanyProfile {
                symbol: symbol.to_string(),
                name: Some(format!("{} Inc", symbol)),
                ..Default::default()
            })
        }

        async fn search_symbols(
            &self,
            keywords: &str,
        ) -> Result<Vec<SymbolMatch>, MarketDataError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.delay().await;
            self.check_fail()?;
            Ok(vec![SymbolMatch::new(
                keywords.to_uppercase(),
                format!("{} Inc", keywords),
                "Equity",
                "United States",
                "USD",
            )])
        }
    }

    fn service(provider: Arc<StubProvider>) -> StockService {
        StockService::new(provider)
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_hits_cache() {
        let provider = Arc::new(StubProvider::new());
        let service = service(provider.clone());

        let first = service.top_movers().await.unwrap();
        let second = service.top_movers().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.movers_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_fetches() {
        let provider = Arc::new(StubProvider::new());
        let policy = StockCachePolicy {
            movers_ttl: Duration::zero(),
            ..Default::default()
        };
        let service = StockService::with_policy(provider.clone(), policy);

        service.top_movers().await.unwrap();
        service.top_movers().await.unwrap();

        assert_eq!(provider.movers_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_overview_cached_per_symbol() {
        let provider = Arc::new(StubProvider::new());
        let service = service(provider.clone());

        let aapl = service.company_overview("AAPL").await.unwrap();
        service.company_overview("AAPL").await.unwrap();
        let msft = service.company_overview("MSFT").await.unwrap();

        assert_eq!(aapl.symbol, "AAPL");
        assert_eq!(msft.symbol, "MSFT");
        assert_eq!(provider.overview_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_search_cached_per_keyword() {
        let provider = Arc::new(StubProvider::new());
        let service = service(provider.clone());

        service.search_ticker("tesco").await.unwrap();
        service.search_ticker("tesco").await.unwrap();
        service.search_ticker("apple").await.unwrap();

        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_propagates_and_is_not_cached() {
        let provider = Arc::new(StubProvider::new());
        let service = service(provider.clone());

        provider.set_fail(true);
        let err = service.top_movers().await.unwrap_err();
        assert!(err.to_string().contains("boom"));

        provider.set_fail(false);
        service.top_movers().await.unwrap();
        assert_eq!(provider.movers_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let provider = Arc::new(StubProvider::new());
        let service = service(provider.clone());

        service.top_movers().await.unwrap();
        service.company_overview("AAPL").await.unwrap();
        service.clear_cache();
        service.top_movers().await.unwrap();
        service.company_overview("AAPL").await.unwrap();

        assert_eq!(provider.movers_calls.load(Ordering::SeqCst), 2);
        assert_eq!(provider.overview_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cache_write_survives_caller_cancellation() {
        let provider = Arc::new(StubProvider::with_delay(50));
        let service = Arc::new(service(provider.clone()));

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move {
                let _ = service.top_movers().await;
            }
        });

        // Abandon the caller while the fetch is in flight
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        task.abort();
        let _ = task.await;

        // The detached fetch still completes and populates the cache
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        service.top_movers().await.unwrap();
        assert_eq!(provider.movers_calls.load(Ordering::SeqCst), 1);
    }
}
