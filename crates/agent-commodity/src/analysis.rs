//! Moving average and trend classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean of the first `window` prices, or of all prices when fewer are
/// available. `None` when there is nothing to average.
pub fn moving_average(prices: &[f64], window: usize) -> Option<f64> {
    let take = window.min(prices.len());
    if take == 0 {
        return None;
    }

    let sum: f64 = prices[..take].iter().sum();
    Some(sum / take as f64)
}

/// Direction of the current price relative to its moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
}

impl Trend {
    /// Bullish only when the price is strictly above the average
    pub fn classify(price: f64, moving_average: f64) -> Self {
        if price > moving_average {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub commodity: String,
    pub current_price: f64,
    pub moving_average: f64,
    pub trend: Trend,
}

impl TrendReport {
    /// Classify `current_price` against `moving_average`
    pub fn new(commodity: impl Into<String>, current_price: f64, moving_average: f64) -> Self {
        Self {
            commodity: commodity.into(),
            current_price,
            moving_average,
            trend: Trend::classify(current_price, moving_average),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_average_uses_first_window_entries_only() {
        let mut prices: Vec<f64> = (1..=20).map(f64::from).collect();
        let expected = 10.5;
        assert_eq!(moving_average(&prices, 20), Some(expected));

        // Anything past the window must not move the average
        prices.extend([1_000.0, -1_000.0, 99_999.0]);
        assert_eq!(moving_average(&prices, 20), Some(expected));
    }

    #[test]
    fn test_average_of_short_series_uses_everything() {
        let prices = [2.0, 4.0, 9.0];
        assert_eq!(moving_average(&prices, 20), Some(5.0));
        assert_eq!(moving_average(&[7.25], 20), Some(7.25));
    }

    #[test]
    fn test_average_of_nothing() {
        assert_eq!(moving_average(&[], 20), None);
        assert_eq!(moving_average(&[1.0], 0), None);
    }

    #[test]
    fn test_classification_tie_is_bearish() {
        assert_eq!(Trend::classify(101.0, 100.0), Trend::Bullish);
        assert_eq!(Trend::classify(100.0, 100.0), Trend::Bearish);
        assert_eq!(Trend::classify(99.0, 100.0), Trend::Bearish);
    }

    #[test]
    fn test_report_wire_shape() {
        let report = TrendReport::new("Gold", 2050.0, 2000.0);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "commodity": "Gold",
                "currentPrice": 2050.0,
                "movingAverage": 2000.0,
                "trend": "bullish"
            })
        );
    }
}
