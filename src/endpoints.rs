//! CryptoCompare REST API endpoint constants.

/// Base URL for the min-api market data endpoints.
pub const MIN_API_BASE_URL: &str = "https://min-api.cryptocompare.com/data";

/// Base URL for the main site data endpoints.
pub const SITE_API_BASE_URL: &str = "https://www.cryptocompare.com/api/data";

/// Base URL for the API usage statistics endpoints.
pub const STATS_BASE_URL: &str = "https://min-api.cryptocompare.com/stats";

/// Coin listing and snapshot endpoints.
pub mod coins {
    /// General info for all listed coins (min-api).
    pub const COIN_LIST: &str = "/all/coinlist";
    /// Snapshot data for a currency pair (site API).
    pub const PAIR_SNAPSHOT: &str = "/coinsnapshot/";
    /// Full snapshot for a single coin by its site id (site API).
    pub const COIN_SNAPSHOT_BY_ID: &str = "/coinsnapshotfullbyid/";
}

/// Historical price endpoints (min-api).
pub mod historic {
    /// Minute-resolution OHLCV history.
    pub const HISTO_MINUTE: &str = "/histominute";
    /// Hour-resolution OHLCV history.
    pub const HISTO_HOUR: &str = "/histohour";
    /// Day-resolution OHLCV history.
    pub const HISTO_DAY: &str = "/histoday";
    /// Price of a pair at a past timestamp.
    pub const PRICE_HISTORICAL: &str = "/pricehistorical";
    /// Current day average price.
    pub const DAY_AVG: &str = "/dayAvg";
}

/// Current price and market endpoints (min-api).
pub mod market {
    /// Single symbol to multiple symbols.
    pub const PRICE: &str = "/price";
    /// Multiple symbols to multiple symbols.
    pub const PRICE_MULTI: &str = "/pricemulti";
    /// Full tickers for multiple pairs.
    pub const PRICE_MULTI_FULL: &str = "/pricemultifull";
    /// Aggregated average across chosen exchanges.
    pub const GENERATE_AVG: &str = "/generateAvg";
    /// Top coins by volume into a symbol.
    pub const TOP_VOLUMES: &str = "/top/volumes";
    /// Top trading pairs from a symbol.
    pub const TOP_PAIRS: &str = "/top/pairs";
}

/// Exchange listing endpoints (min-api).
pub mod exchanges {
    /// Trading pairs per exchange.
    pub const ALL_EXCHANGES: &str = "/all/exchanges";
    /// Top exchanges for a pair.
    pub const TOP_EXCHANGES: &str = "/top/exchanges";
}

/// Mining catalog endpoints (site API).
pub mod mining {
    /// Mining contract catalog.
    pub const CONTRACTS: &str = "/miningcontracts/";
    /// Mining equipment catalog.
    pub const EQUIPMENT: &str = "/miningequipment/";
}

/// News endpoints (min-api).
pub mod news {
    /// News provider listing.
    pub const PROVIDERS: &str = "/news/providers";
    /// Latest news stories.
    pub const STORIES: &str = "/news/";
}

/// Social statistics endpoints (site API).
pub mod social {
    /// Social stats for a coin or exchange by site id.
    pub const STATS: &str = "/socialstats/";
}

/// API usage statistics endpoints.
pub mod stats {
    /// Aggregate remaining-call report across all time windows.
    pub const RATE_LIMIT: &str = "/rate/limit";
}

/// Published parameter length ceilings.
///
/// The upstream API documents a maximum character length for each
/// free-text query parameter; values beyond these fail locally before
/// any network activity.
pub mod limits {
    /// Single symbol (`fsym`, `tsym`).
    pub const SYMBOL_MAX_LENGTH: usize = 10;
    /// Comma-separated symbol list (`tsyms`).
    pub const SYMBOL_LIST_MAX_LENGTH: usize = 30;
    /// Long comma-separated symbol list accepted by current prices.
    pub const SYMBOL_LONG_LIST_MAX_LENGTH: usize = 500;
    /// `fsyms` list for multi-symbol prices.
    pub const MULTI_PRICE_FROM_LIST_MAX_LENGTH: usize = 300;
    /// `tsyms` list for multi-symbol prices.
    pub const MULTI_PRICE_TO_LIST_MAX_LENGTH: usize = 100;
    /// Exchange name (`e`).
    pub const EXCHANGE_MAX_LENGTH: usize = 30;
    /// Exchange list for aggregated averages (`e` on generateAvg).
    pub const EXCHANGE_LIST_MAX_LENGTH: usize = 150;
    /// Client identification string (`extraParams`).
    pub const EXTRA_PARAMS_MAX_LENGTH: usize = 2000;
}
