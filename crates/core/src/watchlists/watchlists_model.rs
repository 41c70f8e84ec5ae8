use serde::{Deserialize, Serialize};

use finure_market_data::TickerQuote;

/// A named, user-curated list of tracked stocks.
///
/// Membership identity is the ticker symbol: repeated observations of the
/// same ticker at different prices refer to the same member.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    /// User-chosen, unique watchlist name
    pub name: String,

    /// Members in insertion order
    pub stocks: Vec<TickerQuote>,
}

impl Watchlist {
    /// Create an empty watchlist.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stocks: Vec::new(),
        }
    }

    /// Whether a stock with the same ticker is a member.
    pub fn contains(&self, stock: &TickerQuote) -> bool {
        self.stocks.iter().any(|s| s.ticker == stock.ticker)
    }
}
