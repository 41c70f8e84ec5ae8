//! State holder for the full-list view of gainers or losers.

use log::error;
use std::sync::Arc;

use finure_market_data::TickerQuote;

use crate::stocks::StockServiceTrait;

use super::state_cell::StateCell;

/// Which movers group the view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoverKind {
    Gainers,
    Losers,
}

/// Fetches and exposes the selected movers group as a flat list.
pub struct ViewAllViewModel {
    service: Arc<dyn StockServiceTrait>,
    stocks: StateCell<Vec<TickerQuote>>,
    is_loading: StateCell<bool>,
    error: StateCell<Option<String>>,
}

impl ViewAllViewModel {
    pub fn new(service: Arc<dyn StockServiceTrait>) -> Self {
        Self {
            service,
            stocks: StateCell::new(Vec::new()),
            is_loading: StateCell::new(false),
            error: StateCell::new(None),
        }
    }

    pub fn stocks(&self) -> &StateCell<Vec<TickerQuote>> {
        &self.stocks
    }

    pub fn is_loading(&self) -> &StateCell<bool> {
        &self.is_loading
    }

    pub fn error(&self) -> &StateCell<Option<String>> {
        &self.error
    }

    /// Loads the requested movers group.
    pub async fn load(&self, kind: MoverKind) {
        self.is_loading.set(true);
        self.error.set(None);
        match self.service.top_movers().await {
            Ok(movers) => {
                let stocks = match kind {
                    MoverKind::Gainers => movers.top_gainers,
                    MoverKind::Losers => movers.top_losers,
                };
                self.stocks.set(stocks);
            }
            Err(e) => {
                error!("failed to load movers list: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        self.is_loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use async_trait::async_trait;
    use finure_market_data::{CompanyProfile, MarketMovers, SymbolMatch};

    struct StubService;

    #[async_trait]
    impl StockServiceTrait for StubService {
        async fn top_movers(&self) -> Result<MarketMovers> {
            Ok(MarketMovers {
                top_gainers: vec![TickerQuote {
                    ticker: "UP".to_string(),
                    ..Default::default()
                }],
                top_losers: vec![TickerQuote {
                    ticker: "DOWN".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }

        async fn company_overview(&self, _symbol: &str) -> Result<CompanyProfile> {
            unimplemented!("not used by this view")
        }

        async fn search_ticker(&self, _keyword: &str) -> Result<Vec<SymbolMatch>> {
            unimplemented!("not used by this view")
        }

        fn clear_cache(&self) {}
    }

    #[tokio::test]
    async fn test_load_gainers() {
        let vm = ViewAllViewModel::new(Arc::new(StubService));
        vm.load(MoverKind::Gainers).await;

        let stocks = vm.stocks().get();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].ticker, "UP");
    }

    #[tokio::test]
    async fn test_load_losers() {
        let vm = ViewAllViewModel::new(Arc::new(StubService));
        vm.load(MoverKind::Losers).await;

        assert_eq!(vm.stocks().get()[0].ticker, "DOWN");
    }
}
