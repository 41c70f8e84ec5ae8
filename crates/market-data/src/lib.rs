//! Finure Market Data Crate
//!
//! This crate provides typed access to the Alpha Vantage quote-data API
//! for the Finure application.
//!
//! # Overview
//!
//! The market data crate supports three query shapes against the single
//! `query` endpoint family:
//! - Top movers (gainers, losers, most actively traded) via `TOP_GAINERS_LOSERS`
//! - Company fundamentals via `OVERVIEW`
//! - Ticker search via `SYMBOL_SEARCH`
//!
//! # Core Types
//!
//! - [`TickerQuote`] - A single mover row (price fields are wire-faithful strings)
//! - [`MarketMovers`] - Grouped top gainers/losers/most active
//! - [`CompanyProfile`] - Company fundamentals and descriptive data
//! - [`SymbolMatch`] - One result of a ticker search
//! - [`MarketDataProvider`] - The provider seam, implemented by [`AlphaVantageProvider`]

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{CompanyProfile, MarketMovers, SymbolMatch, TickerQuote};

// Re-export provider types
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::MarketDataProvider;

pub use errors::MarketDataError;
