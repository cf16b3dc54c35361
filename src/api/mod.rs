//! Typed endpoint groups for the CryptoCompare REST API.
//!
//! Every call goes through the [`RateGateway`], which checks the
//! remaining call budget before the request is sent.

mod coins;
mod exchanges;
mod historic;
mod market;
mod mining;
mod news;
mod social;

pub use coins::Coins;
pub use exchanges::Exchanges;
pub use historic::{
    AverageType, CalcType, DayAverageOptions, Historic, HistoryOptions, PriceAtTimeOptions,
};
pub use market::{ExchangeAverageOptions, Market, PriceOptions, TopOptions};
pub use mining::Mining;
pub use news::News;
pub use social::Social;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::CryptoCompareError;
use crate::gateway::RateGateway;

/// Entry point to the CryptoCompare API.
///
/// Bundles one endpoint group per API area, all sharing a single
/// [`RateGateway`].
///
/// # Example
///
/// ```rust,no_run
/// use cryptocompare_api_client::CryptoCompare;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = CryptoCompare::new();
///     let prices = api.market.get_price("BTC", "USD,EUR", None).await?;
///     println!("BTC/USD: {:?}", prices.get("USD"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CryptoCompare {
    /// Coin directory and snapshot endpoints.
    pub coins: Coins,
    /// OHLCV history endpoints.
    pub historic: Historic,
    /// Current price and toplist endpoints.
    pub market: Market,
    /// Exchange directory and toplist endpoints.
    pub exchanges: Exchanges,
    /// Mining contract and equipment endpoints.
    pub mining: Mining,
    /// News feed endpoints.
    pub news: News,
    /// Social statistics endpoints.
    pub social: Social,
    gateway: RateGateway,
}

impl CryptoCompare {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self::with_gateway(RateGateway::new())
    }

    /// Create a client on top of a preconfigured gateway.
    pub fn with_gateway(gateway: RateGateway) -> Self {
        Self {
            coins: Coins::new(gateway.clone()),
            historic: Historic::new(gateway.clone()),
            market: Market::new(gateway.clone()),
            exchanges: Exchanges::new(gateway.clone()),
            mining: Mining::new(gateway.clone()),
            news: News::new(gateway.clone()),
            social: Social::new(gateway.clone()),
            gateway,
        }
    }

    /// The gateway shared by every endpoint group.
    ///
    /// Useful for pre-checking the remaining call budget without making
    /// a data call.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cryptocompare_api_client::CryptoCompare;
    /// use cryptocompare_api_client::gateway::CallKind;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let api = CryptoCompare::new();
    ///     if api.gateway().is_admissible(CallKind::Histo).await? {
    ///         let history = api.historic.get_day("BTC", "USD", None).await?;
    ///         println!("{} candles", history.data.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn gateway(&self) -> &RateGateway {
        &self.gateway
    }
}

impl Default for CryptoCompare {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a response body and deserialize it.
pub(crate) async fn read_json<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        CryptoCompareError::Deserialization(format!(
            "Failed to parse response: {}. Body: {}",
            e, body
        ))
    })
}

/// Pull one field out of a response envelope and deserialize it.
pub(crate) fn extract_field<T>(mut value: serde_json::Value, field: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let inner = value
        .get_mut(field)
        .map(serde_json::Value::take)
        .ok_or_else(|| {
            CryptoCompareError::Deserialization(format!("Response missing '{}' field", field))
        })?;
    serde_json::from_value(inner).map_err(|e| {
        CryptoCompareError::Deserialization(format!("Failed to parse '{}' field: {}", field, e))
    })
}

/// Reject a parameter that exceeds the length the API accepts.
pub(crate) fn check_length(field: &'static str, value: &str, max_length: usize) -> Result<()> {
    if value.chars().count() > max_length {
        return Err(CryptoCompareError::InvalidParameter { field, max_length });
    }
    Ok(())
}

/// Append serialized options to a URL that already has a query string.
pub(crate) fn append_options<Q>(url: &mut String, options: Option<&Q>) -> Result<()>
where
    Q: Serialize,
{
    if let Some(options) = options {
        let query = serde_urlencoded::to_string(options)
            .map_err(|e| CryptoCompareError::Deserialization(e.to_string()))?;
        if !query.is_empty() {
            url.push('&');
            url.push_str(&query);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length_allows_value_at_limit() {
        assert!(check_length("fsym", "BTC", 10).is_ok());
        assert!(check_length("fsym", "ABCDEFGHIJ", 10).is_ok());
    }

    #[test]
    fn test_check_length_rejects_value_over_limit() {
        let err = check_length("fsym", "ABCDEFGHIJK", 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The max character length of fsym is 10"
        );
    }

    #[test]
    fn test_check_length_counts_characters_not_bytes() {
        // Five characters even though the encoding is longer.
        assert!(check_length("fsym", "ÄÖÜÉÑ", 5).is_ok());
    }

    #[test]
    fn test_extract_field_reports_missing_key() {
        let value = serde_json::json!({"Response": "Error", "Message": "no data"});
        let err = extract_field::<f64>(value, "USD").unwrap_err();
        assert!(err.to_string().contains("missing 'USD'"));
    }

    #[test]
    fn test_extract_field_reads_nested_object() {
        let value = serde_json::json!({"RAW": {"BTC": {"USD": 4024.5}}});
        let raw: std::collections::HashMap<String, std::collections::HashMap<String, f64>> =
            extract_field(value, "RAW").unwrap();
        assert_eq!(raw["BTC"]["USD"], 4024.5);
    }

    #[test]
    fn test_append_options_skips_empty_query() {
        #[derive(Serialize, Default)]
        struct Opts {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }

        let mut url = String::from("http://example.com/data/price?fsym=BTC");
        append_options(&mut url, Some(&Opts::default())).unwrap();
        assert_eq!(url, "http://example.com/data/price?fsym=BTC");

        append_options(&mut url, Some(&Opts { limit: Some(5) })).unwrap();
        assert_eq!(url, "http://example.com/data/price?fsym=BTC&limit=5");
    }
}
