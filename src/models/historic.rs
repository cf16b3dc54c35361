//! OHLCV history types shared by the minute, hour and day endpoints.

use serde::Deserialize;

/// OHLCV history for a currency pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct History {
    /// Response status, "Success" on a good reply.
    pub response: String,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
    /// Candles in chronological order.
    pub data: Vec<HistoryEntry>,
    /// Unix timestamp of the newest candle.
    #[serde(default)]
    pub time_to: i64,
    /// Unix timestamp of the oldest candle.
    #[serde(default)]
    pub time_from: i64,
    /// Whether the first candle predates the requested range.
    #[serde(default)]
    pub first_value_in_array: bool,
    /// How the quote conversion was performed.
    #[serde(default)]
    pub conversion_type: Option<ConversionType>,
    /// Whether the candles span more than one native period.
    #[serde(default)]
    pub aggregated: bool,
}

/// A single OHLCV candle.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HistoryEntry {
    /// Unix timestamp of the candle open.
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price of the period.
    pub high: f64,
    /// Lowest price of the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume in the base currency.
    #[serde(rename = "volumefrom")]
    pub volume_from: f64,
    /// Traded volume in the quote currency.
    #[serde(rename = "volumeto")]
    pub volume_to: f64,
}

/// Conversion applied when a pair does not trade directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionType {
    /// Conversion method, e.g. "direct" or "multiply".
    #[serde(rename = "type")]
    pub conversion: String,
    /// Intermediate symbol used for the conversion, empty when direct.
    #[serde(rename = "conversionSymbol", default)]
    pub conversion_symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_deserializes_candles() {
        let body = r#"{
            "Response": "Success",
            "Type": 100,
            "Aggregated": false,
            "Data": [
                {"time": 1545073200, "close": 4024.13, "high": 4031.97, "low": 4015.77, "open": 4018.22, "volumefrom": 1867.12, "volumeto": 7509278.9},
                {"time": 1545076800, "close": 4039.01, "high": 4041.5, "low": 4020.0, "open": 4024.13, "volumefrom": 1024.55, "volumeto": 4130934.2}
            ],
            "TimeTo": 1545076800,
            "TimeFrom": 1545073200,
            "FirstValueInArray": true,
            "ConversionType": {"type": "direct", "conversionSymbol": ""}
        }"#;

        let history: History = serde_json::from_str(body).unwrap();
        assert_eq!(history.data.len(), 2);
        assert_eq!(history.data[0].time, 1545073200);
        assert_eq!(history.data[1].close, 4039.01);
        assert_eq!(history.data[0].volume_from, 1867.12);
        assert!(history.first_value_in_array);
        assert_eq!(history.conversion_type.unwrap().conversion, "direct");
    }

    #[test]
    fn test_history_without_conversion_block() {
        let body = r#"{
            "Response": "Success",
            "Data": [],
            "TimeTo": 0,
            "TimeFrom": 0
        }"#;

        let history: History = serde_json::from_str(body).unwrap();
        assert!(history.data.is_empty());
        assert!(history.conversion_type.is_none());
        assert!(!history.aggregated);
    }
}
