use serde::{Deserialize, Serialize};

/// Company fundamentals from the `OVERVIEW` query.
///
/// All numeric fields are wire-faithful strings; the typed accessors apply
/// the provider's conventions for absent values ("None", "-", "0", "").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Ticker symbol the profile was requested for
    pub symbol: String,

    /// Company display name
    pub name: Option<String>,

    /// Free-text business description
    pub description: Option<String>,

    /// Sector classification (e.g., "TECHNOLOGY")
    pub sector: Option<String>,

    /// Industry classification (e.g., "COMPUTER & OFFICE EQUIPMENT")
    pub industry: Option<String>,

    /// Market capitalization, integer-as-string
    pub market_capitalization: Option<String>,

    /// Price/earnings ratio
    pub pe_ratio: Option<String>,

    /// Earnings per share
    pub eps: Option<String>,

    /// Dividend per share
    pub dividend_per_share: Option<String>,

    /// Dividend yield as a decimal fraction
    pub dividend_yield: Option<String>,

    /// Consensus analyst price target
    pub analyst_target_price: Option<String>,

    /// Trailing-twelve-month return on equity
    pub return_on_equity_ttm: Option<String>,

    /// Net profit margin
    pub profit_margin: Option<String>,

    /// Reporting currency (e.g., "USD")
    pub currency: Option<String>,

    /// Country of incorporation
    pub country: Option<String>,

    /// Listing exchange (e.g., "NYSE")
    pub exchange: Option<String>,

    /// Company website
    pub official_site: Option<String>,

    /// 52-week high price
    pub week_52_high: Option<String>,

    /// 52-week low price
    pub week_52_low: Option<String>,
}

impl CompanyProfile {
    /// Parse a string field as f64, handling "None", "-", "0" and empty values
    fn parse_f64(s: &Option<String>) -> Option<f64> {
        s.as_ref()
            .filter(|v| !v.is_empty() && *v != "None" && *v != "-" && *v != "0")
            .and_then(|v| v.parse::<f64>().ok())
    }

    /// Market capitalization as a number, when present and parseable.
    pub fn market_cap(&self) -> Option<f64> {
        Self::parse_f64(&self.market_capitalization)
    }

    /// Price/earnings ratio as a number.
    pub fn pe_ratio_value(&self) -> Option<f64> {
        Self::parse_f64(&self.pe_ratio)
    }

    /// Dividend yield as a number.
    pub fn dividend_yield_value(&self) -> Option<f64> {
        Self::parse_f64(&self.dividend_yield)
    }

    /// 52-week high as a number.
    pub fn week_52_high_value(&self) -> Option<f64> {
        Self::parse_f64(&self.week_52_high)
    }

    /// 52-week low as a number.
    pub fn week_52_low_value(&self) -> Option<f64> {
        Self::parse_f64(&self.week_52_low)
    }
}
