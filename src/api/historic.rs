//! OHLCV history endpoints.

use std::collections::HashMap;

use serde::Serialize;

use crate::Result;
use crate::api::{append_options, check_length, extract_field, read_json};
use crate::endpoints::{historic, limits};
use crate::gateway::{CallKind, RateGateway};
use crate::models::historic::History;

/// How a candle value is derived when averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalcType {
    /// Use the close price.
    Close,
    /// Use the midpoint between high and low.
    MidHighLow,
    /// Divide quote volume by base volume.
    VolFVolT,
}

/// Averaging method for the day average endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AverageType {
    /// Volume weighted average of the hourly closes.
    #[serde(rename = "HourVWAP")]
    HourVwap,
    /// Use the midpoint between daily high and low.
    MidHighLow,
    /// Divide quote volume by base volume.
    VolFVolT,
}

/// Optional parameters for the minute, hour and day history endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryOptions {
    /// Convert through BTC when the pair does not trade directly.
    #[serde(rename = "tryConversion", skip_serializing_if = "Option::is_none")]
    pub try_conversion: Option<bool>,
    /// Exchange to source the candles from, defaults to the aggregate.
    #[serde(rename = "e", skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Number of native periods per candle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<u32>,
    /// Align aggregated candles to predictable boundaries.
    #[serde(
        rename = "aggregatePredictableTimePeriods",
        skip_serializing_if = "Option::is_none"
    )]
    pub aggregate_predictable_time_periods: Option<bool>,
    /// Number of candles to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Unix timestamp of the newest candle to return.
    #[serde(rename = "toTs", skip_serializing_if = "Option::is_none")]
    pub to_ts: Option<i64>,
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl HistoryOptions {
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

/// Optional parameters for the historical price endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceAtTimeOptions {
    /// Convert through BTC when the pair does not trade directly.
    #[serde(rename = "tryConversion", skip_serializing_if = "Option::is_none")]
    pub try_conversion: Option<bool>,
    /// Unix timestamp to price at, defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    /// Exchange to source the price from, defaults to the aggregate.
    #[serde(rename = "e", skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// How the price is derived from the daily candle.
    #[serde(rename = "calculationType", skip_serializing_if = "Option::is_none")]
    pub calculation_type: Option<CalcType>,
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl PriceAtTimeOptions {
    /// Options pricing at a specific moment.
    pub fn at(ts: i64) -> Self {
        Self {
            ts: Some(ts),
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

/// Optional parameters for the day average endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayAverageOptions {
    /// Convert through BTC when the pair does not trade directly.
    #[serde(rename = "tryConversion", skip_serializing_if = "Option::is_none")]
    pub try_conversion: Option<bool>,
    /// Exchange to source the candles from, defaults to the aggregate.
    #[serde(rename = "e", skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Averaging method, defaults to the hourly VWAP.
    #[serde(rename = "avgType", skip_serializing_if = "Option::is_none")]
    pub avg_type: Option<AverageType>,
    /// Hour offset from UTC for the day boundary.
    #[serde(rename = "UTCHourDiff", skip_serializing_if = "Option::is_none")]
    pub utc_hour_diff: Option<i32>,
    /// Unix timestamp inside the day to average.
    #[serde(rename = "toTs", skip_serializing_if = "Option::is_none")]
    pub to_ts: Option<i64>,
    /// Caller name forwarded to the API for usage reporting.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<String>,
    /// Ask the server to sign the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

impl DayAverageOptions {
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

/// OHLCV history endpoints.
#[derive(Debug, Clone)]
pub struct Historic {
    gateway: RateGateway,
}

impl Historic {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get minute candles for a pair.
    ///
    /// Minute data is only kept for the last seven days.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cryptocompare_api_client::CryptoCompare;
    /// use cryptocompare_api_client::api::HistoryOptions;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let api = CryptoCompare::new();
    ///     let options = HistoryOptions {
    ///         limit: Some(60),
    ///         ..Default::default()
    ///     };
    ///     let history = api.historic.get_minute("BTC", "USD", Some(&options)).await?;
    ///     println!("{} candles", history.data.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_minute(
        &self,
        fsym: &str,
        tsym: &str,
        options: Option<&HistoryOptions>,
    ) -> Result<History> {
        self.history(historic::HISTO_MINUTE, fsym, tsym, options)
            .await
    }

    /// Get hourly candles for a pair.
    pub async fn get_hour(
        &self,
        fsym: &str,
        tsym: &str,
        options: Option<&HistoryOptions>,
    ) -> Result<History> {
        self.history(historic::HISTO_HOUR, fsym, tsym, options)
            .await
    }

    /// Get daily candles for a pair.
    pub async fn get_day(
        &self,
        fsym: &str,
        tsym: &str,
        options: Option<&HistoryOptions>,
    ) -> Result<History> {
        self.history(historic::HISTO_DAY, fsym, tsym, options).await
    }

    /// Get the price of a coin in several quote currencies at a point
    /// in time.
    ///
    /// Returns a map from quote symbol to price.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsyms` - Comma separated quote symbols, e.g. "USD,EUR".
    pub async fn get_price_at_time(
        &self,
        fsym: &str,
        tsyms: &str,
        options: Option<&PriceAtTimeOptions>,
    ) -> Result<HashMap<String, f64>> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsyms", tsyms, limits::SYMBOL_LIST_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let fsym = fsym.to_uppercase();
        let mut url = format!(
            "{}{}?fsym={}&tsyms={}",
            self.gateway.min_api_url(),
            historic::PRICE_HISTORICAL,
            fsym,
            tsyms.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Histo).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, &fsym)
    }

    /// Get the averaged price of a pair over one day.
    ///
    /// # Arguments
    ///
    /// * `fsym` - Base symbol, e.g. "BTC".
    /// * `tsym` - Quote symbol, e.g. "USD".
    pub async fn get_day_average(
        &self,
        fsym: &str,
        tsym: &str,
        options: Option<&DayAverageOptions>,
    ) -> Result<f64> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsym", tsym, limits::SYMBOL_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let tsym = tsym.to_uppercase();
        let mut url = format!(
            "{}{}?fsym={}&tsym={}",
            self.gateway.min_api_url(),
            historic::DAY_AVG,
            fsym.to_uppercase(),
            tsym
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Histo).await?;
        let value: serde_json::Value = read_json(response).await?;
        extract_field(value, &tsym)
    }

    async fn history(
        &self,
        path: &str,
        fsym: &str,
        tsym: &str,
        options: Option<&HistoryOptions>,
    ) -> Result<History> {
        check_length("fsym", fsym, limits::SYMBOL_MAX_LENGTH)?;
        check_length("tsym", tsym, limits::SYMBOL_MAX_LENGTH)?;
        if let Some(options) = options {
            options.validate()?;
        }

        let mut url = format!(
            "{}{}?fsym={}&tsym={}",
            self.gateway.min_api_url(),
            path,
            fsym.to_uppercase(),
            tsym.to_uppercase()
        );
        append_options(&mut url, options)?;

        let response = self.gateway.get_json(&url, CallKind::Histo).await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_options_serialize_with_renamed_keys() {
        let options = HistoryOptions {
            try_conversion: Some(false),
            exchange: Some("Kraken".to_string()),
            aggregate: Some(3),
            limit: Some(120),
            to_ts: Some(1545076800),
            ..Default::default()
        };

        let query = serde_urlencoded::to_string(&options).unwrap();
        assert_eq!(
            query,
            "tryConversion=false&e=Kraken&aggregate=3&limit=120&toTs=1545076800"
        );
    }

    #[test]
    fn test_average_type_serializes_api_names() {
        let options = DayAverageOptions {
            avg_type: Some(AverageType::HourVwap),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "avgType=HourVWAP"
        );

        let options = DayAverageOptions {
            avg_type: Some(AverageType::VolFVolT),
            utc_hour_diff: Some(-5),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "avgType=VolFVolT&UTCHourDiff=-5"
        );
    }

    #[test]
    fn test_calc_type_serializes_api_names() {
        let options = PriceAtTimeOptions {
            ts: Some(1545076800),
            calculation_type: Some(CalcType::MidHighLow),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "ts=1545076800&calculationType=MidHighLow"
        );
    }

    #[test]
    fn test_options_validate_exchange_length() {
        let options = HistoryOptions::for_exchange("X".repeat(31));
        let err = options.validate().unwrap_err();
        assert_eq!(err.to_string(), "The max character length of e is 30");
    }
}
