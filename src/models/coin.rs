//! Coin directory and per-coin snapshot types.

use std::collections::HashMap;

use serde::Deserialize;

/// Full directory of coins known to CryptoCompare.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinList {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Coins keyed by symbol.
    #[serde(rename = "Data")]
    pub coins: HashMap<String, CoinEntry>,
}

/// One entry in the coin directory.
///
/// Numeric-looking fields such as `id` and `sort_order` are served as
/// strings and kept that way.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoinEntry {
    /// Internal CryptoCompare id.
    pub id: String,
    /// Relative URL of the coin page.
    pub url: String,
    /// Relative URL of the coin logo.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Short name, usually the symbol.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Long name of the coin.
    pub coin_name: String,
    /// Display name, e.g. "Bitcoin (BTC)".
    pub full_name: String,
    /// Hashing algorithm, "N/A" when not mineable.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Proof type, e.g. "PoW".
    #[serde(default)]
    pub proof_type: Option<String>,
    /// "1" when the full supply was premined.
    #[serde(default)]
    pub fully_premined: Option<String>,
    /// Total coin supply as reported by the project.
    #[serde(default)]
    pub total_coin_supply: Option<String>,
    /// Premined amount, "N/A" when not applicable.
    #[serde(default)]
    pub pre_mined_value: Option<String>,
    /// Free float supply, "N/A" when not applicable.
    #[serde(default)]
    pub total_coins_free_float: Option<String>,
    /// Position in the default CryptoCompare ordering.
    pub sort_order: String,
    /// Whether the listing is sponsored.
    #[serde(default)]
    pub sponsored: bool,
}

/// Market snapshot for a single currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairSnapshot {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
    /// Snapshot payload.
    #[serde(rename = "Data")]
    pub data: PairSnapshotData,
}

/// Aggregated pair data plus the per-exchange tickers behind it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PairSnapshotData {
    /// Hashing algorithm of the base coin.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Proof type of the base coin.
    #[serde(default)]
    pub proof_type: Option<String>,
    /// Current block number, 0 when not mineable.
    #[serde(default)]
    pub block_number: i64,
    /// Network hash rate in hashes per second.
    #[serde(default)]
    pub net_hashes_per_second: f64,
    /// Coins mined so far.
    #[serde(default)]
    pub total_coins_mined: f64,
    /// Current block reward.
    #[serde(default)]
    pub block_reward: f64,
    /// Volume-weighted aggregate across all markets.
    pub aggregated_data: AggregatedData,
    /// Individual tickers for each exchange trading the pair.
    #[serde(default)]
    pub exchanges: Vec<ExchangeTicker>,
}

/// Aggregate ticker computed over every market of a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregatedData {
    /// Message type of the underlying stream record.
    #[serde(rename = "TYPE")]
    pub ticker_type: i64,
    /// Aggregate market name, usually "CCCAGG".
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
    pub flags: i64,
    /// Latest aggregate price in the quote currency.
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
}

/// Ticker for a pair on one specific exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeTicker {
    /// Message type of the underlying stream record.
    #[serde(rename = "TYPE")]
    pub ticker_type: i64,
    /// Exchange name.
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
    pub flags: i64,
    /// Latest traded price in the quote currency.
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
}

/// Full listing-page snapshot for one coin, fetched by id.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinSnapshot {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
    /// Snapshot payload.
    #[serde(rename = "Data")]
    pub data: CoinSnapshotData,
}

/// Sections of a coin listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinSnapshotData {
    /// Search engine metadata for the coin page.
    #[serde(rename = "SEO", default)]
    pub seo: Option<Seo>,
    /// General coin description and chain statistics.
    #[serde(rename = "General", default)]
    pub general: Option<General>,
    /// ICO details when the coin had one.
    #[serde(rename = "Ico", default)]
    pub ico: Option<Ico>,
    /// Streamer subscription channels for the coin.
    #[serde(rename = "Subs", default)]
    pub subs: Vec<String>,
    /// Raw streamer records, pipe separated.
    #[serde(rename = "StreamerDataRaw", default)]
    pub streamer_data_raw: Vec<String>,
}

/// General information block of a coin snapshot.
///
/// Chain statistics are reported as display strings here, unlike the
/// numeric fields of [`PairSnapshotData`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct General {
    /// Internal CryptoCompare id.
    pub id: i64,
    /// Page document type.
    pub document_type: String,
    /// Page heading, e.g. "Bitcoin (BTC)".
    pub h1_text: String,
    /// Red banner text, usually empty.
    #[serde(default)]
    pub danger_top: Option<String>,
    /// Yellow banner text, usually empty.
    #[serde(default)]
    pub warning_top: Option<String>,
    /// Informational banner text.
    #[serde(default)]
    pub info_top: Option<String>,
    /// Ticker symbol.
    pub symbol: String,
    /// Relative URL of the coin page.
    pub url: String,
    /// Base URL for the single page application.
    #[serde(default)]
    pub base_angular_url: Option<String>,
    /// Coin name.
    pub name: String,
    /// Relative URL of the coin logo.
    pub image_url: String,
    /// Description of the project, may contain HTML.
    #[serde(default)]
    pub description: Option<String>,
    /// Feature list, may contain HTML.
    #[serde(default)]
    pub features: Option<String>,
    /// Technology overview, may contain HTML.
    #[serde(default)]
    pub technology: Option<String>,
    /// Total coin supply as reported by the project.
    #[serde(default)]
    pub total_coin_supply: Option<String>,
    /// Hashing algorithm.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Proof type.
    #[serde(default)]
    pub proof_type: Option<String>,
    /// Launch date of the project.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Twitter handle including the leading @.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Affiliate link for the project.
    #[serde(default)]
    pub affiliate_url: Option<String>,
    /// Project website as an HTML anchor.
    #[serde(default)]
    pub website: Option<String>,
    /// Sponsor banner shown on the page.
    #[serde(default)]
    pub sponsor: Option<Sponsor>,
    /// Unix timestamp of the last block explorer sync.
    #[serde(rename = "LastBlockExplorerUpdateTS", default)]
    pub last_block_explorer_update_ts: Option<String>,
    /// Difficulty adjustment schedule.
    #[serde(default)]
    pub difficulty_adjustment: Option<String>,
    /// Block reward reduction schedule.
    #[serde(default)]
    pub block_reward_reduction: Option<String>,
    /// Current block number.
    #[serde(default)]
    pub block_number: Option<String>,
    /// Average block time in seconds.
    #[serde(default)]
    pub block_time: Option<String>,
    /// Network hash rate.
    #[serde(default)]
    pub net_hashes_per_second: Option<String>,
    /// Coins mined so far.
    #[serde(default)]
    pub total_coins_mined: Option<String>,
    /// Coins mined as of the previous explorer sync.
    #[serde(default)]
    pub previous_total_coins_mined: Option<String>,
    /// Current block reward.
    #[serde(default)]
    pub block_reward: Option<String>,
}

/// ICO block of a coin snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ico {
    /// ICO status, "N/A" when the coin had no ICO.
    pub status: String,
    /// Link to the whitepaper.
    #[serde(default)]
    pub white_paper: Option<String>,
}

/// Search engine metadata of a coin page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Seo {
    /// HTML page title.
    pub page_title: String,
    /// HTML meta description.
    #[serde(default)]
    pub page_description: Option<String>,
    /// Canonical base URL of coin pages.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Base URL for images.
    #[serde(default)]
    pub base_image_url: Option<String>,
    /// OpenGraph image for the page.
    #[serde(default)]
    pub og_image_url: Option<String>,
    /// OpenGraph image width in pixels.
    #[serde(default)]
    pub og_image_width: f64,
    /// OpenGraph image height in pixels.
    #[serde(default)]
    pub og_image_height: f64,
}

/// Sponsor banner of a coin page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sponsor {
    /// Banner text.
    #[serde(default)]
    pub text_top: Option<String>,
    /// Sponsor link.
    #[serde(default)]
    pub link: Option<String>,
    /// Sponsor logo URL.
    #[serde(default)]
    pub image_url: Option<String>,
}
