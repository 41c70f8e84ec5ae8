use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single row from the top movers listing.
///
/// Price fields are kept as wire-faithful strings; use the typed accessors
/// when a numeric value is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Ticker symbol (e.g., "AAPL")
    #[serde(default)]
    pub ticker: String,

    /// Last traded price, decimal-as-string
    #[serde(default)]
    pub price: String,

    /// Absolute price change for the session, decimal-as-string
    #[serde(default)]
    pub change_amount: String,

    /// Percentage change for the session (e.g., "3.2345%")
    #[serde(default)]
    pub change_percentage: String,

    /// Traded volume, integer-as-string
    #[serde(default)]
    pub volume: String,
}

impl TickerQuote {
    /// Last price as a decimal, if the wire string parses.
    pub fn price_value(&self) -> Option<Decimal> {
        Decimal::from_str(&self.price).ok()
    }

    /// Absolute change as a decimal, if the wire string parses.
    pub fn change_amount_value(&self) -> Option<Decimal> {
        Decimal::from_str(&self.change_amount).ok()
    }

    /// Percentage change as a fraction-of-one-hundred value.
    ///
    /// Accepts both "3.2345%" and "3.2345".
    pub fn change_percentage_value(&self) -> Option<f64> {
        self.change_percentage
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .ok()
    }

    /// Traded volume as a decimal, if the wire string parses.
    pub fn volume_value(&self) -> Option<Decimal> {
        Decimal::from_str(&self.volume).ok()
    }
}

/// Grouped top movers as returned by the `TOP_GAINERS_LOSERS` query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMovers {
    /// Free-text description of the dataset
    #[serde(default)]
    pub metadata: Option<String>,

    /// Provider-side refresh marker (e.g., "2024-01-15 16:15:59 US/Eastern")
    #[serde(default)]
    pub last_updated: Option<String>,

    /// Largest gainers of the session
    #[serde(default)]
    pub top_gainers: Vec<TickerQuote>,

    /// Largest losers of the session
    #[serde(default)]
    pub top_losers: Vec<TickerQuote>,

    /// Highest-volume symbols of the session
    #[serde(default)]
    pub most_actively_traded: Vec<TickerQuote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(ticker: &str, price: &str) -> TickerQuote {
        TickerQuote {
            ticker: ticker.to_string(),
            price: price.to_string(),
            change_amount: "1.05".to_string(),
            change_percentage: "2.5%".to_string(),
            volume: "123456".to_string(),
        }
    }

    #[test]
    fn test_price_value() {
        assert_eq!(quote("AAPL", "150.25").price_value(), Some(dec!(150.25)));
        assert_eq!(quote("AAPL", "garbage").price_value(), None);
    }

    #[test]
    fn test_change_percentage_value_accepts_percent_suffix() {
        let q = quote("AAPL", "150.25");
        assert_eq!(q.change_percentage_value(), Some(2.5));

        let bare = TickerQuote {
            change_percentage: "2.5".to_string(),
            ..q
        };
        assert_eq!(bare.change_percentage_value(), Some(2.5));
    }

    #[test]
    fn test_volume_value() {
        assert_eq!(quote("AAPL", "1").volume_value(), Some(dec!(123456)));
    }

    #[test]
    fn test_movers_deserialize_defaults_missing_groups() {
        let json = r#"{
            "metadata": "Top gainers, losers, and most actively traded US tickers",
            "last_updated": "2024-01-15 16:15:59 US/Eastern",
            "top_gainers": [
                {
                    "ticker": "ABCD",
                    "price": "4.31",
                    "change_amount": "1.85",
                    "change_percentage": "75.2033%",
                    "volume": "58732099"
                }
            ]
        }"#;

        let movers: MarketMovers = serde_json::from_str(json).unwrap();
        assert_eq!(movers.top_gainers.len(), 1);
        assert_eq!(movers.top_gainers[0].ticker, "ABCD");
        assert!(movers.top_losers.is_empty());
        assert!(movers.most_actively_traded.is_empty());
    }
}
