//! Mining contract and equipment types.

use std::collections::HashMap;

use serde::Deserialize;

/// Directory of cloud mining contracts.
#[derive(Debug, Clone, Deserialize)]
pub struct Contracts {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Contracts keyed by their numeric id.
    #[serde(rename = "MiningData")]
    pub contracts: HashMap<u32, Contract>,
    /// Chain statistics for the coins the contracts mine.
    #[serde(rename = "CoinData", default)]
    pub coins: HashMap<String, MiningCoin>,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
}

/// A cloud mining contract offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contract {
    /// Internal CryptoCompare id.
    pub id: i64,
    /// Id of the selling company.
    #[serde(default)]
    pub parent_id: i64,
    /// Selling company name.
    pub company: String,
    /// Relative URL of the contract page.
    #[serde(default)]
    pub url: Option<String>,
    /// Company logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Contract name.
    pub name: String,
    /// Whether CryptoCompare recommends the offer.
    #[serde(default)]
    pub recommended: bool,
    /// Whether the listing is sponsored.
    #[serde(default)]
    pub sponsored: bool,
    /// Affiliate link to the seller.
    #[serde(rename = "AffiliateURL", default)]
    pub affiliate_url: Option<String>,
    /// Algorithm the contract mines.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Purchased hash rate, in hashes per second.
    #[serde(default)]
    pub hashes_per_second: Option<String>,
    /// Upfront cost of the contract.
    #[serde(default)]
    pub cost: f64,
    /// Currency of the cost.
    #[serde(default)]
    pub currency: Option<String>,
    /// Recurring fee charged by the seller.
    #[serde(default)]
    pub fee_value: f64,
    /// Currency of the recurring fee.
    #[serde(default)]
    pub fee_value_currency: Option<String>,
    /// Contract duration, e.g. "lifetime".
    #[serde(default)]
    pub contract_length: Option<String>,
    /// Symbols the contract can mine.
    #[serde(default)]
    pub currencies_available: Option<String>,
    /// Logo for the mineable symbols.
    #[serde(default)]
    pub currencies_available_logo: Option<String>,
    /// Display name for the mineable symbols.
    #[serde(default)]
    pub currencies_available_name: Option<String>,
}

/// Directory of mining hardware.
#[derive(Debug, Clone, Deserialize)]
pub struct Equipment {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Equipment keyed by its numeric id.
    #[serde(rename = "MiningData")]
    pub equipment: HashMap<u32, EquipmentItem>,
    /// Chain statistics for the coins the equipment mines.
    #[serde(rename = "CoinData", default)]
    pub coins: HashMap<String, MiningCoin>,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
}

/// A piece of mining hardware.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentItem {
    /// Internal CryptoCompare id.
    pub id: i64,
    /// Id of the selling company.
    #[serde(default)]
    pub parent_id: i64,
    /// Selling company name.
    pub company: String,
    /// Relative URL of the equipment page.
    #[serde(default)]
    pub url: Option<String>,
    /// Company logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Equipment name.
    pub name: String,
    /// Whether CryptoCompare recommends the offer.
    #[serde(default)]
    pub recommended: bool,
    /// Whether the listing is sponsored.
    #[serde(default)]
    pub sponsored: bool,
    /// Affiliate link to the seller.
    #[serde(rename = "AffiliateURL", default)]
    pub affiliate_url: Option<String>,
    /// Algorithm the hardware mines.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Hardware category, e.g. "ASIC".
    #[serde(default)]
    pub equipment_type: Option<String>,
    /// Power draw in watts.
    #[serde(default)]
    pub power_consumption: Option<String>,
    /// Hash rate, in hashes per second.
    #[serde(default)]
    pub hashes_per_second: Option<String>,
    /// Purchase price.
    #[serde(default)]
    pub cost: f64,
    /// Currency of the price.
    #[serde(default)]
    pub currency: Option<String>,
    /// Symbols the hardware can mine.
    #[serde(default)]
    pub currencies_available: Option<String>,
    /// Logo for the mineable symbols.
    #[serde(default)]
    pub currencies_available_logo: Option<String>,
    /// Display name for the mineable symbols.
    #[serde(default)]
    pub currencies_available_name: Option<String>,
}

/// Chain statistics for a mineable coin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MiningCoin {
    /// Current price in US dollars.
    #[serde(rename = "PriceUSD", default)]
    pub price_usd: f64,
    /// Ticker symbol.
    pub symbol: String,
    /// Difficulty adjustment schedule.
    #[serde(default)]
    pub difficulty_adjustment: Option<String>,
    /// Block reward reduction schedule.
    #[serde(default)]
    pub block_reward_reduction: Option<String>,
    /// Current block number.
    #[serde(default)]
    pub block_number: i64,
    /// Average block time in seconds.
    #[serde(default)]
    pub block_time: f64,
    /// Network hash rate in hashes per second.
    #[serde(default)]
    pub net_hashes_per_second: f64,
    /// Coins mined so far.
    #[serde(default)]
    pub total_coins_mined: f64,
    /// Coins mined as of the previous sync.
    #[serde(default)]
    pub previous_total_coins_mined: f64,
    /// Current block reward.
    #[serde(default)]
    pub block_reward: f64,
}
