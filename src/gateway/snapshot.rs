//! Call budget classification and the server-side remaining-call report.

use serde::Deserialize;

/// Budget category an endpoint call is accounted under.
///
/// The upstream service meters historic, price and news calls separately.
/// Everything else falls under [`CallKind::Other`], which is not metered
/// and therefore always admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Historical data endpoints.
    Histo,
    /// Current price, coin, market and exchange endpoints.
    Price,
    /// News endpoints.
    News,
    /// Unmetered endpoints (mining, social).
    Other,
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CallKind::Histo => "histo",
            CallKind::Price => "price",
            CallKind::News => "news",
            CallKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Time window the upstream budget report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// Current second.
    Second,
    /// Current minute.
    Minute,
    /// Current hour.
    Hour,
    /// Current day.
    Day,
    /// Current month.
    Month,
}

impl TimeWindow {
    /// Lowercase name used by the rate limit report.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Second => "second",
            TimeWindow::Minute => "minute",
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Month => "month",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Windows checked before a metered call is admitted.
///
/// Day and month counts are reported by upstream but not enforced; the
/// service throttles on the short windows only.
pub const ENFORCED_WINDOWS: [TimeWindow; 3] =
    [TimeWindow::Second, TimeWindow::Minute, TimeWindow::Hour];

/// Per-window call counts from the rate limit report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowCounts {
    /// Count for the current second.
    #[serde(default)]
    pub second: Option<u64>,
    /// Count for the current minute.
    #[serde(default)]
    pub minute: Option<u64>,
    /// Count for the current hour.
    #[serde(default)]
    pub hour: Option<u64>,
    /// Count for the current day.
    #[serde(default)]
    pub day: Option<u64>,
    /// Count for the current month.
    #[serde(default)]
    pub month: Option<u64>,
}

impl WindowCounts {
    /// Count for a window, if the report included one.
    pub fn get(&self, window: TimeWindow) -> Option<u64> {
        match window {
            TimeWindow::Second => self.second,
            TimeWindow::Minute => self.minute,
            TimeWindow::Hour => self.hour,
            TimeWindow::Day => self.day,
            TimeWindow::Month => self.month,
        }
    }
}

/// The server-reported call budget at a point in time.
///
/// Fetched fresh for every admissibility decision and discarded right
/// after it; nothing is cached between calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateSnapshot {
    /// Calls already made per window.
    #[serde(rename = "CallsMade", default)]
    pub calls_made: WindowCounts,
    /// Calls remaining per window.
    #[serde(rename = "CallsLeft", default)]
    pub calls_left: WindowCounts,
}

impl RateSnapshot {
    /// Remaining calls for a window, if reported.
    pub fn remaining(&self, window: TimeWindow) -> Option<u64> {
        self.calls_left.get(window)
    }

    /// Whether every enforced window still reports remaining calls.
    ///
    /// A window absent from the report counts as exhausted.
    pub fn has_budget(&self) -> bool {
        ENFORCED_WINDOWS
            .iter()
            .all(|window| self.remaining(*window).is_some_and(|left| left > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(calls_left: serde_json::Value) -> RateSnapshot {
        serde_json::from_value(serde_json::json!({
            "CallsMade": { "second": 1, "minute": 10, "hour": 100 },
            "CallsLeft": calls_left,
        }))
        .unwrap()
    }

    #[test]
    fn test_has_budget_when_all_enforced_windows_positive() {
        let snapshot = snapshot(serde_json::json!({
            "second": 5, "minute": 100, "hour": 1000, "day": 10000, "month": 100000
        }));
        assert!(snapshot.has_budget());
        assert_eq!(snapshot.remaining(TimeWindow::Minute), Some(100));
    }

    #[test]
    fn test_zero_in_any_enforced_window_denies() {
        for window in ["second", "minute", "hour"] {
            let mut counts = serde_json::json!({ "second": 5, "minute": 100, "hour": 1000 });
            counts[window] = serde_json::json!(0);
            assert!(!snapshot(counts).has_budget(), "{window} at zero should deny");
        }
    }

    #[test]
    fn test_missing_enforced_window_denies() {
        let snapshot = snapshot(serde_json::json!({ "second": 5, "hour": 1000 }));
        assert_eq!(snapshot.remaining(TimeWindow::Minute), None);
        assert!(!snapshot.has_budget());
    }

    #[test]
    fn test_day_and_month_are_not_enforced() {
        let snapshot = snapshot(serde_json::json!({
            "second": 5, "minute": 100, "hour": 1000, "day": 0, "month": 0
        }));
        assert!(snapshot.has_budget());
    }

    #[test]
    fn test_empty_report_denies() {
        let snapshot: RateSnapshot = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(!snapshot.has_budget());
    }

    #[test]
    fn test_call_kind_display() {
        assert_eq!(CallKind::Histo.to_string(), "histo");
        assert_eq!(CallKind::Price.to_string(), "price");
        assert_eq!(CallKind::News.to_string(), "news");
        assert_eq!(CallKind::Other.to_string(), "other");
    }

    #[test]
    fn test_window_names_match_report_keys() {
        assert_eq!(TimeWindow::Second.as_str(), "second");
        assert_eq!(TimeWindow::Month.as_str(), "month");
    }
}
