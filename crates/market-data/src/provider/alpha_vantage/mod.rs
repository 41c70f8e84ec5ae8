//! Alpha Vantage market data provider implementation.
//!
//! This module provides market data from the Alpha Vantage API:
//! - Top movers via the TOP_GAINERS_LOSERS endpoint
//! - Company fundamentals via the OVERVIEW endpoint
//! - Ticker search via the SYMBOL_SEARCH endpoint
//!
//! Note: Alpha Vantage free tier is limited to 25 API calls per day, and
//! rate-limit rejections arrive as HTTP 200 bodies carrying a "Note" or
//! "Information" key rather than a 429 status.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, MarketMovers, SymbolMatch};
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage market data provider.
///
/// Serves the three query shapes the application uses: top movers,
/// company overview, and symbol search.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

// ============================================================================
// Response structures for the Alpha Vantage API
// ============================================================================

/// TOP_GAINERS_LOSERS response.
///
/// The payload fields already match [`MarketMovers`] on the wire; the extra
/// keys carry API-level soft errors delivered inside a 200 body.
#[derive(Debug, Deserialize)]
struct MoversResponse {
    #[serde(flatten)]
    movers: MarketMovers,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// OVERVIEW response for company fundamentals.
/// Only includes fields that map to CompanyProfile; the API returns more.
#[derive(Debug, Deserialize)]
struct CompanyOverviewResponse {
    #[serde(rename = "Symbol")]
    symbol: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Sector")]
    sector: Option<String>,
    #[serde(rename = "Industry")]
    industry: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    market_capitalization: Option<String>,
    #[serde(rename = "PERatio")]
    pe_ratio: Option<String>,
    #[serde(rename = "EPS")]
    eps: Option<String>,
    #[serde(rename = "DividendPerShare")]
    dividend_per_share: Option<String>,
    #[serde(rename = "DividendYield")]
    dividend_yield: Option<String>,
    #[serde(rename = "AnalystTargetPrice")]
    analyst_target_price: Option<String>,
    #[serde(rename = "ReturnOnEquityTTM")]
    return_on_equity_ttm: Option<String>,
    #[serde(rename = "ProfitMargin")]
    profit_margin: Option<String>,
    #[serde(rename = "Currency")]
    currency: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Exchange")]
    exchange: Option<String>,
    #[serde(rename = "OfficialSite")]
    official_site: Option<String>,

    // The provider uses leading-digit key names for these two
    #[serde(rename = "52WeekHigh")]
    week_52_high: Option<String>,
    #[serde(rename = "52WeekLow")]
    week_52_low: Option<String>,

    // Error handling
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl CompanyOverviewResponse {
    /// Check if the response carries no actual data.
    ///
    /// An unknown symbol returns an empty JSON object with HTTP 200.
    fn has_error(&self) -> bool {
        self.error_message.is_some() || self.symbol.is_none()
    }

    /// Convert to CompanyProfile.
    fn into_profile(self) -> CompanyProfile {
        CompanyProfile {
            symbol: self.symbol.unwrap_or_default(),
            name: self.name,
            description: self.description,
            sector: self.sector,
            industry: self.industry,
            market_capitalization: self.market_capitalization,
            pe_ratio: self.pe_ratio,
            eps: self.eps,
            dividend_per_share: self.dividend_per_share,
            dividend_yield: self.dividend_yield,
            analyst_target_price: self.analyst_target_price,
            return_on_equity_ttm: self.return_on_equity_ttm,
            profit_margin: self.profit_margin,
            currency: self.currency,
            country: self.country,
            exchange: self.exchange,
            official_site: self.official_site,
            week_52_high: self.week_52_high,
            week_52_low: self.week_52_low,
        }
    }
}

/// SYMBOL_SEARCH response.
#[derive(Debug, Deserialize)]
struct SymbolSearchResponse {
    #[serde(rename = "bestMatches")]
    best_matches: Option<Vec<SymbolMatchEntry>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// One entry of the `bestMatches` array, with its numbered wire keys.
#[derive(Debug, Deserialize)]
struct SymbolMatchEntry {
    #[serde(rename = "1. symbol")]
    symbol: String,
    #[serde(rename = "2. name")]
    name: String,
    #[serde(rename = "3. type", default)]
    kind: String,
    #[serde(rename = "4. region", default)]
    region: String,
    #[serde(rename = "8. currency", default)]
    currency: String,
    #[serde(rename = "9. matchScore", default)]
    match_score: Option<String>,
}

impl SymbolMatchEntry {
    fn into_match(self) -> SymbolMatch {
        let score = self.match_score.as_deref().and_then(|s| s.parse().ok());
        let result = SymbolMatch::new(self.symbol, self.name, self.kind, self.region, self.currency);
        match score {
            Some(score) => result.with_score(score),
            None => result,
        }
    }
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(BASE_URL, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// Check for API-level errors in the response.
    fn check_api_error(
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(ref msg) = error_message {
            // Check if it's a "not found" type error
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        // "Note" usually indicates rate limiting
        if let Some(ref msg) = note {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage note: {}", msg);
        }

        // "Information" can indicate various issues
        if let Some(ref msg) = information {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage info: {}", msg);
        }

        Ok(())
    }

    /// Fetch top movers using the TOP_GAINERS_LOSERS endpoint.
    async fn fetch_top_movers(&self) -> Result<MarketMovers, MarketDataError> {
        let params = [("function", "TOP_GAINERS_LOSERS")];

        let text = self.fetch(&params).await?;
        let response: MoversResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse top movers response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        debug!(
            "Alpha Vantage: fetched {} gainers, {} losers, {} most active",
            response.movers.top_gainers.len(),
            response.movers.top_losers.len(),
            response.movers.most_actively_traded.len()
        );

        Ok(response.movers)
    }

    /// Fetch company fundamentals using the OVERVIEW endpoint.
    async fn fetch_company_overview(
        &self,
        symbol: &str,
    ) -> Result<CompanyProfile, MarketDataError> {
        let params = [("function", "OVERVIEW"), ("symbol", symbol)];

        let text = self.fetch(&params).await?;
        let response: CompanyOverviewResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse company overview response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        if response.has_error() {
            return Err(MarketDataError::SymbolNotFound(format!(
                "No company overview data for symbol: {}",
                symbol
            )));
        }

        debug!("Alpha Vantage: fetched company overview for {}", symbol);

        Ok(response.into_profile())
    }

    /// Search for tickers using the SYMBOL_SEARCH endpoint.
    async fn fetch_symbol_search(
        &self,
        keywords: &str,
    ) -> Result<Vec<SymbolMatch>, MarketDataError> {
        let params = [("function", "SYMBOL_SEARCH"), ("keywords", keywords)];

        let text = self.fetch(&params).await?;
        let response: SymbolSearchResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse symbol search response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        // A missing bestMatches array is a valid empty result
        let matches: Vec<SymbolMatch> = response
            .best_matches
            .unwrap_or_default()
            .into_iter()
            .map(SymbolMatchEntry::into_match)
            .collect();

        debug!(
            "Alpha Vantage: search for {:?} returned {} matches",
            keywords,
            matches.len()
        );

        Ok(matches)
    }
}

// ============================================================================
// MarketDataProvider trait implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn top_movers(&self) -> Result<MarketMovers, MarketDataError> {
        self.fetch_top_movers().await
    }

    async fn company_overview(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        self.fetch_company_overview(symbol).await
    }

    async fn search_symbols(&self, keywords: &str) -> Result<Vec<SymbolMatch>, MarketDataError> {
        self.fetch_symbol_search(keywords).await
    }
}
