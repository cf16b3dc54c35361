//! Social statistics endpoints.

use crate::Result;
use crate::api::read_json;
use crate::endpoints::social;
use crate::gateway::{CallKind, RateGateway};
use crate::models::social::SocialStats;

/// Social statistics endpoints.
#[derive(Debug, Clone)]
pub struct Social {
    gateway: RateGateway,
}

impl Social {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get community and developer statistics for a coin by its id.
    ///
    /// Coin ids appear in the coin directory, see
    /// [`Coins::get_coin_list`](crate::api::Coins::get_coin_list).
    pub async fn get_stats(&self, id: u32) -> Result<SocialStats> {
        let url = format!("{}{}?id={}", self.gateway.site_api_url(), social::STATS, id);
        let response = self.gateway.get_json(&url, CallKind::Other).await?;
        read_json(response).await
    }
}
