//! Coin directory and snapshot endpoints.

use crate::Result;
use crate::api::read_json;
use crate::endpoints::coins;
use crate::gateway::{CallKind, RateGateway};
use crate::models::coin::{CoinList, CoinSnapshot, PairSnapshot};

/// Coin directory and snapshot endpoints.
#[derive(Debug, Clone)]
pub struct Coins {
    gateway: RateGateway,
}

impl Coins {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get the full directory of coins known to CryptoCompare.
    ///
    /// The response is large, around several megabytes.
    pub async fn get_coin_list(&self) -> Result<CoinList> {
        let url = format!("{}{}", self.gateway.min_api_url(), coins::COIN_LIST);
        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }

    /// Get the aggregate market snapshot for one currency pair.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsym` - Quote symbol, e.g. "USD".
    pub async fn get_pair_snapshot(&self, fsym: &str, tsym: &str) -> Result<PairSnapshot> {
        let url = format!(
            "{}{}?fsym={}&tsym={}",
            self.gateway.site_api_url(),
            coins::PAIR_SNAPSHOT,
            fsym.to_uppercase(),
            tsym.to_uppercase()
        );
        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }

    /// Get the full listing-page snapshot for a coin by its id.
    ///
    /// Coin ids appear in the coin directory and in social statistics.
    pub async fn get_coin_snapshot(&self, id: u32) -> Result<CoinSnapshot> {
        let url = format!(
            "{}{}?id={}",
            self.gateway.site_api_url(),
            coins::COIN_SNAPSHOT_BY_ID,
            id
        );
        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }
}
