//! Price series parsed from market data responses

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::moving_average;

/// Calendar-date range requested from the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of `days` calendar days ending on (and including) `end`
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Start date as `YYYY-MM-DD`
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date as `YYYY-MM-DD`
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Single dated price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date, if the upstream row carried a parseable one
    pub date: Option<NaiveDate>,
    pub price: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date: Some(date),
            price,
        }
    }

    /// Parse one `[date, price, ...]` row
    ///
    /// Column 1 is the price. Rows without a numeric price are unusable and
    /// yield `None`.
    pub fn from_row(row: &Value) -> Option<Self> {
        let columns = row.as_array()?;
        let price = columns.get(1)?.as_f64()?;
        let date = columns
            .first()
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        Some(Self { date, price })
    }
}

/// Observations ordered most recent first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    observations: Vec<Observation>,
}

impl PriceSeries {
    /// Build a series, sorting by date descending
    ///
    /// When any row lacks a parseable date the rows cannot be ordered
    /// reliably, and upstream order (most recent first) is kept as-is.
    pub fn new(mut observations: Vec<Observation>) -> Self {
        if observations.iter().all(|o| o.date.is_some()) {
            observations.sort_by(|a, b| b.date.cmp(&a.date));
        }
        Self { observations }
    }

    /// Extract the series from a `{"dataset_data": {"data": [...]}}` document
    ///
    /// Any other shape produces an empty series.
    pub fn from_dataset(document: &Value) -> Self {
        let rows = document
            .get("dataset_data")
            .and_then(|d| d.get("data"))
            .and_then(Value::as_array);

        match rows {
            Some(rows) => Self::new(rows.iter().filter_map(Observation::from_row).collect()),
            None => Self::default(),
        }
    }

    /// Most recent observation
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Prices, most recent first
    pub fn prices(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.price).collect()
    }

    /// Mean of the `window` most recent prices, or of all of them when the
    /// series is shorter. `None` for an empty series.
    pub fn moving_average(&self, window: usize) -> Option<f64> {
        moving_average(&self.prices(), window)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
