//! The process-wide watchlist store.
//!
//! Holds every user-defined watchlist and its membership as the single
//! source of truth, observable by multiple presentation state holders.
//! Each mutation replaces the published snapshot atomically; subscribers
//! that join later immediately observe the latest snapshot.

use tokio::sync::watch;

use finure_market_data::TickerQuote;

use super::watchlists_model::Watchlist;

/// In-memory store of user watchlists with reactive snapshots.
///
/// Mutations run under the channel lock, so readers only ever observe
/// complete snapshots. Watchlists persist for the process lifetime only.
#[derive(Debug)]
pub struct WatchlistStore {
    snapshot: watch::Sender<Vec<Watchlist>>,
}

impl Default for WatchlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchlistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self { snapshot }
    }

    /// Subscribe to snapshot updates.
    ///
    /// The receiver starts out holding the latest snapshot and is notified
    /// on every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Watchlist>> {
        self.snapshot.subscribe()
    }

    /// Current snapshot of all watchlists, in creation order.
    pub fn snapshot(&self) -> Vec<Watchlist> {
        self.snapshot.borrow().clone()
    }

    /// All watchlist names, in creation order.
    pub fn names(&self) -> Vec<String> {
        self.snapshot
            .borrow()
            .iter()
            .map(|w| w.name.clone())
            .collect()
    }

    /// Members of a watchlist; empty for unknown names.
    pub fn stocks_in(&self, name: &str) -> Vec<TickerQuote> {
        self.snapshot
            .borrow()
            .iter()
            .find(|w| w.name == name)
            .map(|w| w.stocks.clone())
            .unwrap_or_default()
    }

    /// Creates an empty watchlist; no-op if the name already exists.
    pub fn create_empty(&self, name: &str) {
        self.snapshot.send_if_modified(|lists| {
            if lists.iter().any(|w| w.name == name) {
                return false;
            }
            lists.push(Watchlist::new(name));
            true
        });
    }

    /// Adds a stock to a named watchlist, creating the list if needed.
    ///
    /// No-op when a stock with the same ticker is already a member.
    pub fn add_stock(&self, name: &str, stock: TickerQuote) {
        self.snapshot.send_if_modified(|lists| {
            match lists.iter_mut().find(|w| w.name == name) {
                Some(list) => {
                    if list.contains(&stock) {
                        return false;
                    }
                    list.stocks.push(stock);
                }
                None => {
                    let mut list = Watchlist::new(name);
                    list.stocks.push(stock);
                    lists.push(list);
                }
            }
            true
        });
    }

    /// Removes the first member with the same ticker; no-op when the
    /// watchlist or the stock is absent.
    pub fn remove_stock(&self, name: &str, stock: &TickerQuote) {
        self.snapshot.send_if_modified(|lists| {
            let Some(list) = lists.iter_mut().find(|w| w.name == name) else {
                return false;
            };
            let Some(index) = list.stocks.iter().position(|s| s.ticker == stock.ticker) else {
                return false;
            };
            list.stocks.remove(index);
            true
        });
    }

    /// Whether the stock is a member of at least one watchlist.
    pub fn is_watched(&self, stock: &TickerQuote) -> bool {
        self.snapshot.borrow().iter().any(|w| w.contains(stock))
    }

    /// Names of all watchlists containing the stock, in creation order.
    pub fn watchlists_containing(&self, stock: &TickerQuote) -> Vec<String> {
        self.snapshot
            .borrow()
            .iter()
            .filter(|w| w.contains(stock))
            .map(|w| w.name.clone())
            .collect()
    }

    /// Removes every watchlist.
    pub fn clear_all(&self) {
        self.snapshot.send_if_modified(|lists| {
            if lists.is_empty() {
                return false;
            }
            lists.clear();
            true
        });
    }
}
