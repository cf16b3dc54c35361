//! Exchange directory and toplist endpoints.

use crate::Result;
use crate::api::market::TopOptions;
use crate::api::{append_options, check_length, extract_field, read_json};
use crate::endpoints::{exchanges, limits};
use crate::gateway::{CallKind, RateGateway};
use crate::models::exchanges::{ExchangeMap, TopExchange};

/// Exchange directory and toplist endpoints.
#[derive(Debug, Clone)]
pub struct Exchanges {
    gateway: RateGateway,
}

impl Exchanges {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get every exchange CryptoCompare tracks and the pairs each one
    /// trades.
    pub async fn list_exchanges(&self) -> Result<ExchangeMap> {
        let url = format!(
            "{}{}",
            self.gateway.min_api_url(),
            exchanges::ALL_EXCHANGES
        );
        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }

    /// Get the exchanges with the highest 24 hour volume for a pair.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsym` - Quote symbol, e.g. "USD".
    pub async fn get_top_exchanges(
        &self,
        fsym: &str,
        tsym: &str,
        options: Option<&TopOptions>,
    ) -> Result<Vec<TopExchange>> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsym", tsym, limits::SYMBOL_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsym={}&tsym={}",
            self.gateway.min_api_url(),
            exchanges::TOP_EXCHANGES,
            fsym.to_uppercase(),
            tsym.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, "Data")
    }
}
