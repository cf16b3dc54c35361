//! Price, ticker and toplist types for the market endpoints.

use serde::Deserialize;

/// Full streamer-format ticker for one pair, as returned in the `RAW`
/// section of the multi price endpoint.
///
/// The endpoint serializes `TYPE` and `FLAGS` as strings even though
/// they are numeric.
#[derive(Debug, Clone, Deserialize)]
pub struct FullTicker {
    /// Message type of the underlying stream record.
    #[serde(rename = "TYPE")]
    pub ticker_type: String,
    /// Market the value was aggregated from, usually "CCCAGG".
    #[serde(rename = "MARKET")]
    pub market: String,
    /// Base symbol.
    #[serde(rename = "FROMSYMBOL")]
    pub from_symbol: String,
    /// Quote symbol.
    #[serde(rename = "TOSYMBOL")]
    pub to_symbol: String,
    /// Bit field describing which values changed last.
    #[serde(rename = "FLAGS")]
    pub flags: String,
    /// Latest price in the quote currency.
    #[serde(rename = "PRICE")]
    pub price: f64,
    /// Unix timestamp of the last update.
    #[serde(rename = "LASTUPDATE")]
    pub last_update: i64,
    /// Volume of the last trade in the base currency.
    #[serde(rename = "LASTVOLUME", default)]
    pub last_volume: f64,
    /// Volume of the last trade in the quote currency.
    #[serde(rename = "LASTVOLUMETO", default)]
    pub last_volume_to: f64,
    /// Exchange-local id of the last trade.
    #[serde(rename = "LASTTRADEID", default)]
    pub last_trade_id: Option<String>,
    /// Volume since the daily open, base currency.
    #[serde(rename = "VOLUMEDAY", default)]
    pub volume_day: f64,
    /// Volume since the daily open, quote currency.
    #[serde(rename = "VOLUMEDAYTO", default)]
    pub volume_day_to: f64,
    /// Rolling 24 hour volume, base currency.
    #[serde(rename = "VOLUME24HOUR", default)]
    pub volume_24_hour: f64,
    /// Rolling 24 hour volume, quote currency.
    #[serde(rename = "VOLUME24HOURTO", default)]
    pub volume_24_hour_to: f64,
    /// Price at the daily open.
    #[serde(rename = "OPENDAY", default)]
    pub open_day: f64,
    /// Highest price since the daily open.
    #[serde(rename = "HIGHDAY", default)]
    pub high_day: f64,
    /// Lowest price since the daily open.
    #[serde(rename = "LOWDAY", default)]
    pub low_day: f64,
    /// Price 24 hours ago.
    #[serde(rename = "OPEN24HOUR", default)]
    pub open_24_hour: f64,
    /// Highest price in the last 24 hours.
    #[serde(rename = "HIGH24HOUR", default)]
    pub high_24_hour: f64,
    /// Lowest price in the last 24 hours.
    #[serde(rename = "LOW24HOUR", default)]
    pub low_24_hour: f64,
    /// Exchange the last trade happened on.
    #[serde(rename = "LASTMARKET", default)]
    pub last_market: Option<String>,
    /// Absolute price change over 24 hours.
    #[serde(rename = "CHANGE24HOUR", default)]
    pub change_24_hour: f64,
    /// Percentage price change over 24 hours.
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    pub change_pct_24_hour: f64,
    /// Absolute price change since the daily open.
    #[serde(rename = "CHANGEDAY", default)]
    pub change_day: f64,
    /// Percentage price change since the daily open.
    #[serde(rename = "CHANGEPCTDAY", default)]
    pub change_pct_day: f64,
    /// Circulating supply of the base coin.
    #[serde(rename = "SUPPLY", default)]
    pub supply: f64,
    /// Market cap in the quote currency.
    #[serde(rename = "MKTCAP", default)]
    pub market_cap: f64,
    /// 24 hour volume of the base coin across all pairs.
    #[serde(rename = "TOTALVOLUME24H", default)]
    pub total_volume_24_hour: f64,
    /// 24 hour volume of the base coin in the quote currency.
    #[serde(rename = "TOTALVOLUME24HTO", default)]
    pub total_volume_24_hour_to: f64,
}

/// Ticker produced by the custom average endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeAverage {
    /// Market name, "CUSTOMAGG" for custom averages.
    #[serde(rename = "MARKET")]
    pub market: String,
    /// Base symbol.
    #[serde(rename = "FROMSYMBOL")]
    pub from_symbol: String,
    /// Quote symbol.
    #[serde(rename = "TOSYMBOL")]
    pub to_symbol: String,
    /// Bit field describing which values changed last.
    #[serde(rename = "FLAGS", default)]
    pub flags: i64,
    /// Average price in the quote currency.
    #[serde(rename = "PRICE")]
    pub price: f64,
    /// Unix timestamp of the last update.
    #[serde(rename = "LASTUPDATE")]
    pub last_update: i64,
    /// Volume of the last trade in the base currency.
    #[serde(rename = "LASTVOLUME", default)]
    pub last_volume: f64,
    /// Volume of the last trade in the quote currency.
    #[serde(rename = "LASTVOLUMETO", default)]
    pub last_volume_to: f64,
    /// Exchange-local id of the last trade.
    #[serde(rename = "LASTTRADEID", default)]
    pub last_trade_id: Option<String>,
    /// Rolling 24 hour volume, base currency.
    #[serde(rename = "VOLUME24HOUR", default)]
    pub volume_24_hour: f64,
    /// Rolling 24 hour volume, quote currency.
    #[serde(rename = "VOLUME24HOURTO", default)]
    pub volume_24_hour_to: f64,
    /// Price 24 hours ago.
    #[serde(rename = "OPEN24HOUR", default)]
    pub open_24_hour: f64,
    /// Highest price in the last 24 hours.
    #[serde(rename = "HIGH24HOUR", default)]
    pub high_24_hour: f64,
    /// Lowest price in the last 24 hours.
    #[serde(rename = "LOW24HOUR", default)]
    pub low_24_hour: f64,
    /// Exchange the last trade happened on.
    #[serde(rename = "LASTMARKET", default)]
    pub last_market: Option<String>,
    /// Absolute price change over 24 hours.
    #[serde(rename = "CHANGE24HOUR", default)]
    pub change_24_hour: f64,
    /// Percentage price change over 24 hours.
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    pub change_pct_24_hour: f64,
    /// Absolute price change since the daily open.
    #[serde(rename = "CHANGEDAY", default)]
    pub change_day: f64,
    /// Percentage price change since the daily open.
    #[serde(rename = "CHANGEPCTDAY", default)]
    pub change_pct_day: f64,
}

/// Entry of the top coins by volume toplist.
#[derive(Debug, Clone, Deserialize)]
pub struct TopCoin {
    /// Ticker symbol.
    #[serde(rename = "SYMBOL")]
    pub symbol: String,
    /// Circulating supply, 0 for fiat currencies.
    #[serde(rename = "SUPPLY", default)]
    pub supply: f64,
    /// Display name, e.g. "Bitcoin (BTC)".
    #[serde(rename = "FULLNAME")]
    pub full_name: String,
    /// Coin name.
    #[serde(rename = "NAME")]
    pub name: String,
    /// Internal CryptoCompare id, negative for fiat.
    #[serde(rename = "ID")]
    pub id: i64,
    /// 24 hour volume in the quote currency.
    #[serde(rename = "VOLUME24HOURTO", default)]
    pub volume_24_hour_to: f64,
}

/// Entry of the top trading pairs toplist.
#[derive(Debug, Clone, Deserialize)]
pub struct TopPair {
    /// Exchange the volume was measured on, "CCCAGG" for the aggregate.
    pub exchange: String,
    /// Base symbol.
    #[serde(rename = "fromSymbol")]
    pub from_symbol: String,
    /// Quote symbol.
    #[serde(rename = "toSymbol")]
    pub to_symbol: String,
    /// 24 hour volume in the base currency.
    #[serde(rename = "volume24h", default)]
    pub volume_24h: f64,
    /// 24 hour volume in the quote currency.
    #[serde(rename = "volume24hTo", default)]
    pub volume_24h_to: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ticker_reads_string_flags() {
        let body = r#"{
            "TYPE": "5",
            "MARKET": "CCCAGG",
            "FROMSYMBOL": "BTC",
            "TOSYMBOL": "USD",
            "FLAGS": "2049",
            "PRICE": 4025.32,
            "LASTUPDATE": 1545076500,
            "LASTVOLUME": 0.027,
            "LASTVOLUMETO": 108.7,
            "LASTTRADEID": "284210428",
            "VOLUMEDAY": 53435.6,
            "VOLUMEDAYTO": 214816405.2,
            "VOLUME24HOUR": 105489.5,
            "VOLUME24HOURTO": 423325440.4,
            "OPENDAY": 3991.77,
            "HIGHDAY": 4074.9,
            "LOWDAY": 3982.42,
            "OPEN24HOUR": 4010.2,
            "HIGH24HOUR": 4074.9,
            "LOW24HOUR": 3951.47,
            "LASTMARKET": "Coinbase",
            "CHANGE24HOUR": 15.12,
            "CHANGEPCT24HOUR": 0.377,
            "CHANGEDAY": 33.55,
            "CHANGEPCTDAY": 0.84,
            "SUPPLY": 17442512,
            "MKTCAP": 70214372648.9,
            "TOTALVOLUME24H": 340810.4,
            "TOTALVOLUME24HTO": 1367929261.6
        }"#;

        let ticker: FullTicker = serde_json::from_str(body).unwrap();
        assert_eq!(ticker.flags, "2049");
        assert_eq!(ticker.price, 4025.32);
        assert_eq!(ticker.last_market.as_deref(), Some("Coinbase"));
        assert_eq!(ticker.supply, 17442512.0);
    }

    #[test]
    fn test_top_pair_uses_camel_case_keys() {
        let body = r#"{
            "exchange": "CCCAGG",
            "fromSymbol": "BTC",
            "toSymbol": "USD",
            "volume24h": 105489.5,
            "volume24hTo": 423325440.4
        }"#;

        let pair: TopPair = serde_json::from_str(body).unwrap();
        assert_eq!(pair.exchange, "CCCAGG");
        assert_eq!(pair.from_symbol, "BTC");
        assert_eq!(pair.volume_24h_to, 423325440.4);
    }

    #[test]
    fn test_exchange_average_defaults_missing_change_fields() {
        let body = r#"{
            "MARKET": "CUSTOMAGG",
            "FROMSYMBOL": "BTC",
            "TOSYMBOL": "USD",
            "FLAGS": 0,
            "PRICE": 4024.4,
            "LASTUPDATE": 1545076500,
            "LASTVOLUME": 0.2,
            "LASTVOLUMETO": 804.9,
            "LASTTRADEID": "56011157",
            "VOLUME24HOUR": 12345.6,
            "VOLUME24HOURTO": 49680000.1,
            "OPEN24HOUR": 4009.9,
            "HIGH24HOUR": 4075.0,
            "LOW24HOUR": 3950.0,
            "LASTMARKET": "Coinbase"
        }"#;

        let average: ExchangeAverage = serde_json::from_str(body).unwrap();
        assert_eq!(average.market, "CUSTOMAGG");
        assert_eq!(average.change_24_hour, 0.0);
        assert_eq!(average.change_pct_day, 0.0);
    }
}
