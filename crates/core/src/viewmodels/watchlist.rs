//! State holder for the watchlist screen.
//!
//! Derives its cells from the watchlist store's snapshot stream: the list
//! of names, the current selection, and the members of the selected list.
//! When watchlists exist and none is selected, the first one is selected
//! automatically.

use std::sync::Arc;

use finure_market_data::TickerQuote;

use crate::watchlists::{Watchlist, WatchlistStore};

use super::state_cell::StateCell;

pub struct WatchlistViewModel {
    store: Arc<WatchlistStore>,
    watchlist_names: StateCell<Vec<String>>,
    selected: StateCell<Option<String>>,
    stocks: StateCell<Vec<TickerQuote>>,
}

impl WatchlistViewModel {
    /// Creates the state holder and starts following the store.
    ///
    /// Must be called from within a tokio runtime; the follower task ends
    /// when the store is dropped.
    pub fn new(store: Arc<WatchlistStore>) -> Self {
        let watchlist_names = StateCell::new(Vec::new());
        let selected = StateCell::new(None);
        let stocks = StateCell::new(Vec::new());

        // Subscribe before the initial derivation so a mutation landing in
        // between is still observed by the follower task
        let mut rx = store.subscribe();

        let vm = Self {
            store: store.clone(),
            watchlist_names: watchlist_names.clone(),
            selected: selected.clone(),
            stocks: stocks.clone(),
        };
        vm.refresh();

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                Self::apply(&snapshot, &watchlist_names, &selected, &stocks);
            }
        });

        vm
    }

    /// All watchlist names, for the selection UI.
    pub fn watchlist_names(&self) -> &StateCell<Vec<String>> {
        &self.watchlist_names
    }

    /// The currently selected watchlist, if any.
    pub fn selected(&self) -> &StateCell<Option<String>> {
        &self.selected
    }

    /// Members of the selected watchlist.
    pub fn stocks(&self) -> &StateCell<Vec<TickerQuote>> {
        &self.stocks
    }

    /// Changes the selection and re-derives the member list.
    pub fn select_watchlist(&self, name: &str) {
        self.selected.set(Some(name.to_string()));
        self.refresh();
    }

    /// Re-derives every cell from the store's current snapshot.
    pub fn refresh(&self) {
        let snapshot = self.store.snapshot();
        Self::apply(
            &snapshot,
            &self.watchlist_names,
            &self.selected,
            &self.stocks,
        );
    }

    fn apply(
        snapshot: &[Watchlist],
        watchlist_names: &StateCell<Vec<String>>,
        selected: &StateCell<Option<String>>,
        stocks: &StateCell<Vec<TickerQuote>>,
    ) {
        watchlist_names.set(snapshot.iter().map(|w| w.name.clone()).collect());

        // Auto-select the first watchlist when none is selected yet
        if selected.get().is_none() {
            if let Some(first) = snapshot.first() {
                selected.set(Some(first.name.clone()));
            }
        }

        let members = selected
            .get()
            .and_then(|name| snapshot.iter().find(|w| w.name == name))
            .map(|w| w.stocks.clone())
            .unwrap_or_default();
        stocks.set(members);
    }
}
