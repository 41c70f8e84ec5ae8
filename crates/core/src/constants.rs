/// Cache key for the singleton top-movers query
pub const MOVERS_CACHE_KEY: &str = "top_movers";

/// Cache key prefix for overview-by-symbol queries
pub const OVERVIEW_CACHE_PREFIX: &str = "overview_";

/// Cache key prefix for search-by-keyword queries
pub const SEARCH_CACHE_PREFIX: &str = "search_";

/// Default freshness window for repository queries
pub const DEFAULT_CACHE_TTL_MINUTES: i64 = 10;
