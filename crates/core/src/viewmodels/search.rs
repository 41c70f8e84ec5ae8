//! State holder for the ticker search box.

use log::error;
use std::sync::Arc;

use finure_market_data::SymbolMatch;

use crate::stocks::StockServiceTrait;

use super::state_cell::StateCell;

pub struct SearchViewModel {
    service: Arc<dyn StockServiceTrait>,
    results: StateCell<Vec<SymbolMatch>>,
    is_loading: StateCell<bool>,
    error: StateCell<Option<String>>,
}

impl SearchViewModel {
    pub fn new(service: Arc<dyn StockServiceTrait>) -> Self {
        Self {
            service,
            results: StateCell::new(Vec::new()),
            is_loading: StateCell::new(false),
            error: StateCell::new(None),
        }
    }

    pub fn results(&self) -> &StateCell<Vec<SymbolMatch>> {
        &self.results
    }

    pub fn is_loading(&self) -> &StateCell<bool> {
        &self.is_loading
    }

    pub fn error(&self) -> &StateCell<Option<String>> {
        &self.error
    }

    /// Runs a ticker search; a blank keyword clears the results without
    /// touching the service.
    pub async fn search(&self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.results.set(Vec::new());
            self.error.set(None);
            return;
        }

        self.is_loading.set(true);
        self.error.set(None);
        match self.service.search_ticker(keyword).await {
            Ok(matches) => self.results.set(matches),
            Err(e) => {
                error!("ticker search failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        self.is_loading.set(false);
    }
}
