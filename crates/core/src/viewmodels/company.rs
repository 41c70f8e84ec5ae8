//! State holder for the stock detail screen.
//!
//! Handles company overview fetching and watchlist membership for the
//! currently displayed stock.

use log::error;
use std::collections::HashSet;
use std::sync::Arc;

use finure_market_data::{CompanyProfile, TickerQuote};

use crate::stocks::StockServiceTrait;
use crate::watchlists::WatchlistStore;

use super::state_cell::StateCell;

pub struct CompanyViewModel {
    stocks: Arc<dyn StockServiceTrait>,
    watchlists: Arc<WatchlistStore>,
    overview: StateCell<Option<CompanyProfile>>,
    is_loading: StateCell<bool>,
    error: StateCell<Option<String>>,
    watchlist_names: StateCell<Vec<String>>,
    selected_watchlists: StateCell<HashSet<String>>,
    current_stock: StateCell<Option<TickerQuote>>,
}

impl CompanyViewModel {
    pub fn new(stocks: Arc<dyn StockServiceTrait>, watchlists: Arc<WatchlistStore>) -> Self {
        Self {
            stocks,
            watchlists,
            overview: StateCell::new(None),
            is_loading: StateCell::new(false),
            error: StateCell::new(None),
            watchlist_names: StateCell::new(Vec::new()),
            selected_watchlists: StateCell::new(HashSet::new()),
            current_stock: StateCell::new(None),
        }
    }

    /// Company fundamentals for the displayed stock, once loaded.
    pub fn overview(&self) -> &StateCell<Option<CompanyProfile>> {
        &self.overview
    }

    pub fn is_loading(&self) -> &StateCell<bool> {
        &self.is_loading
    }

    pub fn error(&self) -> &StateCell<Option<String>> {
        &self.error
    }

    /// All watchlist names, for the add-to-watchlist dialog.
    pub fn watchlist_names(&self) -> &StateCell<Vec<String>> {
        &self.watchlist_names
    }

    /// Names of the watchlists the displayed stock belongs to.
    pub fn selected_watchlists(&self) -> &StateCell<HashSet<String>> {
        &self.selected_watchlists
    }

    /// Whether the displayed stock is in at least one watchlist.
    pub fn is_in_watchlist(&self) -> bool {
        !self.selected_watchlists.get().is_empty()
    }

    /// Fetches the overview for a symbol and refreshes watchlist state.
    pub async fn load_overview(&self, symbol: &str) {
        self.is_loading.set(true);
        self.error.set(None);
        match self.stocks.company_overview(symbol).await {
            Ok(profile) => {
                self.overview.set(Some(profile));
                self.current_stock.set(Some(TickerQuote {
                    ticker: symbol.to_string(),
                    ..Default::default()
                }));
                self.refresh_membership();
            }
            Err(e) => {
                error!("failed to load overview for {}: {}", symbol, e);
                self.error.set(Some(e.to_string()));
            }
        }
        self.is_loading.set(false);
    }

    /// Creates a new watchlist; blank and duplicate names are ignored.
    pub fn create_watchlist(&self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.watchlist_names.get().iter().any(|n| n == name) {
            return;
        }
        self.watchlists.create_empty(name);
        self.refresh_membership();
    }

    /// Toggles membership of the displayed stock in a watchlist.
    pub fn toggle_watchlist(&self, name: &str, selected: bool) {
        let Some(stock) = self.current_stock.get() else {
            return;
        };
        if selected {
            self.watchlists.add_stock(name, stock);
        } else {
            self.watchlists.remove_stock(name, &stock);
        }
        self.refresh_membership();
    }

    /// Re-derives watchlist names and membership for the displayed stock.
    fn refresh_membership(&self) {
        self.watchlist_names.set(self.watchlists.names());
        let selected = match self.current_stock.get() {
            Some(stock) => self
                .watchlists
                .watchlists_containing(&stock)
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };
        self.selected_watchlists.set(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, Result};
    use async_trait::async_trait;
    use finure_market_data::{MarketDataError, MarketMovers, SymbolMatch};

    struct StubService {
        fail: bool,
    }

    #[async_trait]
    impl StockServiceTrait for StubService {
        async fn top_movers(&self) -> Result<MarketMovers> {
            unimplemented!("not used by this view")
        }

        async fn company_overview(&self, symbol: &str) -> Result<CompanyProfile> {
            if self.fail {
                return Err(Error::MarketData(MarketDataError::SymbolNotFound(
                    symbol.to_string(),
                )));
            }
            Ok(CompanyProfile {
                symbol: symbol.to_string(),
                name: Some(format!("{} Inc", symbol)),
                ..Default::default()
            })
        }

        async fn search_ticker(&self, _keyword: &str) -> Result<Vec<SymbolMatch>> {
            unimplemented!("not used by this view")
        }

        fn clear_cache(&self) {}
    }

    fn viewmodel(fail: bool) -> (CompanyViewModel, Arc<WatchlistStore>) {
        let store = Arc::new(WatchlistStore::new());
        let vm = CompanyViewModel::new(Arc::new(StubService { fail }), store.clone());
        (vm, store)
    }

    #[tokio::test]
    async fn test_load_overview_success() {
        let (vm, _store) = viewmodel(false);
        vm.load_overview("AAPL").await;

        assert_eq!(vm.overview().get().unwrap().symbol, "AAPL");
        assert!(vm.error().get().is_none());
        assert!(!vm.is_loading().get());
    }

    #[tokio::test]
    async fn test_load_overview_failure_sets_error() {
        let (vm, _store) = viewmodel(true);
        vm.load_overview("NOPE").await;

        assert!(vm.overview().get().is_none());
        assert!(vm.error().get().is_some());
    }

    #[tokio::test]
    async fn test_create_watchlist_ignores_blank_and_duplicate_names() {
        let (vm, store) = viewmodel(false);
        vm.load_overview("AAPL").await;

        vm.create_watchlist("  ");
        vm.create_watchlist("Tech");
        vm.create_watchlist("Tech");

        assert_eq!(store.names(), vec!["Tech"]);
        assert_eq!(vm.watchlist_names().get(), vec!["Tech"]);
    }

    #[tokio::test]
    async fn test_toggle_watchlist_updates_membership() {
        let (vm, store) = viewmodel(false);
        vm.load_overview("AAPL").await;
        vm.create_watchlist("Tech");

        vm.toggle_watchlist("Tech", true);
        assert!(vm.is_in_watchlist());
        assert!(vm.selected_watchlists().get().contains("Tech"));
        assert_eq!(store.stocks_in("Tech").len(), 1);

        vm.toggle_watchlist("Tech", false);
        assert!(!vm.is_in_watchlist());
        assert!(store.stocks_in("Tech").is_empty());
    }

    #[tokio::test]
    async fn test_toggle_without_loaded_stock_is_noop() {
        let (vm, store) = viewmodel(false);
        vm.toggle_watchlist("Tech", true);

        assert!(store.names().is_empty());
        assert!(!vm.is_in_watchlist());
    }
}
