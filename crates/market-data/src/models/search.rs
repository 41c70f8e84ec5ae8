//! Search result models for ticker lookup.

use serde::{Deserialize, Serialize};

/// One result of a `SYMBOL_SEARCH` query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Symbol/ticker (e.g., "AAPL", "SHOP.TRT")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc")
    pub name: String,

    /// Asset type (e.g., "Equity", "ETF")
    pub kind: String,

    /// Listing region (e.g., "United States")
    pub region: String,

    /// Trading currency (e.g., "USD")
    pub currency: String,

    /// Relevance score from the provider (higher = better match)
    pub match_score: Option<f64>,
}

impl SymbolMatch {
    /// Create a new match with required fields.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        region: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            kind: kind.into(),
            region: region.into(),
            currency: currency.into(),
            match_score: None,
        }
    }

    /// Set the relevance score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.match_score = Some(score);
        self
    }
}
