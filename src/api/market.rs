//! Current price and toplist endpoints.

use std::collections::HashMap;

use serde::Serialize;

use crate::Result;
use crate::api::{append_options, check_length, extract_field, read_json};
use crate::endpoints::{limits, market};
use crate::gateway::{CallKind, RateGateway};
use crate::models::market::{ExchangeAverage, FullTicker, TopCoin, TopPair};

/// Optional parameters for the price endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceOptions {
    /// Convert through BTC when the pair does not trade directly.
    #[serde(rename = "tryConversion", skip_serializing_if = "Option::is_none")]
    pub try_conversion: Option<bool>,
    /// Exchange to source the price from, defaults to the aggregate.
    #[serde(rename = "e", skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl PriceOptions {
    /// Options scoped to a single exchange.
    pub fn for_exchange(exchange: impl Into<String>) -> Self {
        Self {
            exchange: Some(exchange.into()),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(exchange) = &self.exchange {
            check_length("e", exchange, limits::EXCHANGE_MAX_LENGTH)?;
        }
        if let Some(extra_params) = &self.extra_params {
            check_length("extraParams", extra_params, limits::EXTRA_PARAMS_MAX_LENGTH)?;
        }
        Ok(())
    }
}

/// Optional parameters for the toplist endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopOptions {
    /// Number of entries to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl TopOptions {
    /// Options limiting the number of entries.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(extra_params) = &self.extra_params {
            check_length("extraParams", extra_params, limits::EXTRA_PARAMS_MAX_LENGTH)?;
        }
        Ok(())
    }
}

/// Optional parameters for the custom average endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangeAverageOptions {
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl ExchangeAverageOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(extra_params) = &self.extra_params {
            check_length("extraParams", extra_params, limits::EXTRA_PARAMS_MAX_LENGTH)?;
        }
        Ok(())
    }
}

/// Current price and toplist endpoints.
#[derive(Debug, Clone)]
pub struct Market {
    gateway: RateGateway,
}

impl Market {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get the current price of a coin in several quote currencies.
    ///
    /// Returns a map from quote symbol to price.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsyms` - Comma separated quote symbols, e.g. "USD,EUR".
    pub async fn get_price(
        &self,
        fsym: &str,
        tsyms: &str,
        options: Option<&PriceOptions>,
    ) -> Result<HashMap<String, f64>> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsyms", tsyms, limits::SYMBOL_LONG_LIST_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsym={}&tsyms={}",
            self.gateway.min_api_url(),
            market::PRICE,
            fsym.to_uppercase(),
            tsyms.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }

    /// Get current prices for several coins at once.
    ///
    /// Returns a map from base symbol to quote symbol to price.
    ///
    /// # Arguments
    ///
    /// * `fsyms` - Comma separated base symbols, e.g. "BTC,ETH".
    /// * `tsyms` - Comma separated quote symbols, e.g. "USD,EUR".
    pub async fn get_multi_price(
        &self,
        fsyms: &str,
        tsyms: &str,
        options: Option<&PriceOptions>,
    ) -> Result<HashMap<String, HashMap<String, f64>>> {
        check_length("fsyms", fsyms, limits::MULTI_PRICE_FROM_LIST_MAX_LENGTH)?;
        check_length("tsyms", tsyms, limits::MULTI_PRICE_TO_LIST_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsyms={}&tsyms={}",
            self.gateway.min_api_url(),
            market::PRICE_MULTI,
            fsyms.to_uppercase(),
            tsyms.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        read_json(response).await
    }

    /// Get full tickers for several coins at once.
    ///
    /// Returns the `RAW` section, a map from base symbol to quote
    /// symbol to ticker.
    pub async fn get_multi_full(
        &self,
        fsyms: &str,
        tsyms: &str,
        options: Option<&PriceOptions>,
    ) -> Result<HashMap<String, HashMap<String, FullTicker>>> {
        check_length("fsyms", fsyms, limits::MULTI_PRICE_FROM_LIST_MAX_LENGTH)?;
        check_length("tsyms", tsyms, limits::MULTI_PRICE_TO_LIST_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsyms={}&tsyms={}",
            self.gateway.min_api_url(),
            market::PRICE_MULTI_FULL,
            fsyms.to_uppercase(),
            tsyms.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, "RAW")
    }

    /// Get a volume weighted average price over a chosen set of
    /// exchanges.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsym` - Quote symbol, e.g. "USD".
    /// * `markets` - Comma separated exchange names, e.g. "Kraken,Coinbase".
    pub async fn get_exchange_average(
        &self,
        fsym: &str,
        tsym: &str,
        markets: &str,
        options: Option<&ExchangeAverageOptions>,
    ) -> Result<ExchangeAverage> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsym", tsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("e", markets, limits::EXCHANGE_LIST_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsym={}&tsym={}&e={}",
            self.gateway.min_api_url(),
            market::GENERATE_AVG,
            fsym.to_uppercase(),
            tsym.to_uppercase(),
            markets
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, "RAW")
    }

    /// Get the coins with the highest 24 hour volume in a quote
    /// currency.
    pub async fn get_top_volumes(
        &self,
        tsym: &str,
        options: Option<&TopOptions>,
    ) -> Result<Vec<TopCoin>> {
        check_length("tsym", tsym, limits::SYMBOL_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?tsym={}",
            self.gateway.min_api_url(),
            market::TOP_VOLUMES,
            tsym.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, "Data")
    }

    /// Get the most traded quote currencies for a coin.
    pub async fn get_top_pairs(
        &self,
        fsym: &str,
        options: Option<&TopOptions>,
    ) -> Result<Vec<TopPair>> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsym={}",
            self.gateway.min_api_url(),
            market::TOP_PAIRS,
            fsym.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Price).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, "Data")
    }
}
