//! State holder for the dashboard's top movers view.

use log::error;
use std::sync::Arc;

use finure_market_data::MarketMovers;

use crate::stocks::StockServiceTrait;

use super::state_cell::StateCell;

/// Manages top movers (gainers/losers/most active) data for the dashboard
/// screen.
pub struct MoversViewModel {
    service: Arc<dyn StockServiceTrait>,
    movers: StateCell<Option<MarketMovers>>,
    is_loading: StateCell<bool>,
    error: StateCell<Option<String>>,
}

impl MoversViewModel {
    pub fn new(service: Arc<dyn StockServiceTrait>) -> Self {
        Self {
            service,
            movers: StateCell::new(None),
            is_loading: StateCell::new(false),
            error: StateCell::new(None),
        }
    }

    /// The grouped movers payload, once loaded.
    pub fn movers(&self) -> &StateCell<Option<MarketMovers>> {
        &self.movers
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> &StateCell<bool> {
        &self.is_loading
    }

    /// Last failure as a display message, cleared on each load.
    pub fn error(&self) -> &StateCell<Option<String>> {
        &self.error
    }

    /// Loads top movers and updates the corresponding state.
    pub async fn load_top_movers(&self) {
        self.is_loading.set(true);
        self.error.set(None);
        match self.service.top_movers().await {
            Ok(movers) => self.movers.set(Some(movers)),
            Err(e) => {
                error!("failed to load top movers: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        self.is_loading.set(false);
    }
}
