//! Exchange directory and toplist types.

use std::collections::HashMap;

use serde::Deserialize;

/// Trading pairs available per exchange.
///
/// Maps exchange name to coin symbol to the quote symbols that coin
/// trades against on the exchange.
pub type ExchangeMap = HashMap<String, HashMap<String, Vec<String>>>;

/// Entry of the top exchanges by volume toplist.
#[derive(Debug, Clone, Deserialize)]
pub struct TopExchange {
    /// Exchange name.
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
