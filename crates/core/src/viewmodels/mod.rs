//! Presentation state holders.
//!
//! One state holder per screen. Each exposes its state as [`StateCell`]s
//! (loading flag, error message, data payload) plus a small set of action
//! methods. Every failure is caught here and converted into observable
//! error state; nothing in this module panics or propagates errors to the
//! UI layer.

mod company;
mod explore;
mod movers;
mod search;
mod state_cell;
mod theme;
mod view_all;
mod watchlist;

pub use company::CompanyViewModel;
pub use explore::ExploreViewModel;
pub use movers::MoversViewModel;
pub use search::SearchViewModel;
pub use state_cell::StateCell;
pub use theme::ThemeViewModel;
pub use view_all::{MoverKind, ViewAllViewModel};
pub use watchlist::WatchlistViewModel;
