//! Watchlists module - domain model and the reactive store.

mod watchlists_model;
mod watchlists_store;


pub use watchlists_model::Watchlist;
pub use watchlists_store::WatchlistStore;
