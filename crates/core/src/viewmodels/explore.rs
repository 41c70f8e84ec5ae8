//! State holder for the explore screen.
//!
//! Surfaces only the top-gainers slice; a failed load falls back to an
//! empty list instead of surfacing an error.

use log::warn;
use std::sync::Arc;

use finure_market_data::TickerQuote;

use crate::stocks::StockServiceTrait;

use super::state_cell::StateCell;

pub struct ExploreViewModel {
    service: Arc<dyn StockServiceTrait>,
    top_gainers: StateCell<Vec<TickerQuote>>,
}

impl ExploreViewModel {
    pub fn new(service: Arc<dyn StockServiceTrait>) -> Self {
        Self {
            service,
            top_gainers: StateCell::new(Vec::new()),
        }
    }

    /// Top gainers of the session; empty until loaded, and empty again
    /// after a failed load.
    pub fn top_gainers(&self) -> &StateCell<Vec<TickerQuote>> {
        &self.top_gainers
    }

    /// Loads the top-gainers slice of the movers payload.
    pub async fn load_gainers(&self) {
        match self.service.top_movers().await {
            Ok(movers) => self.top_gainers.set(movers.top_gainers),
            Err(e) => {
                warn!("explore: falling back to empty gainers list: {}", e);
                self.top_gainers.set(Vec::new());
            }
        }
    }
}
