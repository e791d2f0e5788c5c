//! Commodity trend analysis pipeline

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::analysis::TrendReport;
use crate::api::{MarketDataSource, QuandlClient, SourceError};
use crate::config::TrendConfig;
use crate::error::{CommodityError, Result};
use crate::series::DateWindow;
use crate::symbols::CommoditySymbolMap;

/// Resolves a commodity, fetches its recent prices and classifies the trend
///
/// Holds only read-only state, so one analyzer can serve any number of
/// concurrent callers.
#[derive(Clone)]
pub struct TrendAnalyzer {
    symbols: Arc<CommoditySymbolMap>,
    source: Arc<dyn MarketDataSource>,
    config: Arc<TrendConfig>,
}

impl TrendAnalyzer {
    /// Create an analyzer over an arbitrary data source
    pub fn new(
        symbols: Arc<CommoditySymbolMap>,
        source: Arc<dyn MarketDataSource>,
        config: Arc<TrendConfig>,
    ) -> Self {
        Self {
            symbols,
            source,
            config,
        }
    }

    /// Create an analyzer backed by the Quandl HTTP client
    pub fn with_quandl(symbols: Arc<CommoditySymbolMap>, config: Arc<TrendConfig>) -> Result<Self> {
        let client = QuandlClient::new(&config)?;
        Ok(Self::new(symbols, Arc::new(client), config))
    }

    pub fn symbols(&self) -> &CommoditySymbolMap {
        &self.symbols
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Analyze the trend of a commodity as of today (UTC)
    pub async fn analyze_trend(&self, commodity: &str) -> Result<TrendReport> {
        self.analyze_trend_on(commodity, Utc::now().date_naive())
            .await
    }

    /// Analyze the trend of a commodity with the window ending on `today`
    pub async fn analyze_trend_on(&self, commodity: &str, today: NaiveDate) -> Result<TrendReport> {
        let code = self.symbols.resolve(commodity)?;
        let window = DateWindow::ending_on(today, self.config.window_days);

        debug!(commodity, code, start = %window.start, end = %window.end, "Fetching market data");

        let series = self
            .source
            .fetch_series(code, &window)
            .await
            .map_err(|err| {
                warn!(commodity, code, error = %err, "Market data fetch failed");
                match err {
                    SourceError::Timeout => CommodityError::Timeout {
                        commodity: commodity.to_string(),
                    },
                    other => CommodityError::FetchError {
                        commodity: commodity.to_string(),
                        detail: other.to_string(),
                    },
                }
            })?;

        let no_data = || CommodityError::NoData {
            commodity: commodity.to_string(),
        };
        let current_price = series.latest().ok_or_else(no_data)?.price;
        let moving_average = series
            .moving_average(self.config.moving_average_window)
            .ok_or_else(no_data)?;

        let report = TrendReport::new(commodity, current_price, moving_average);

        info!(
            commodity,
            points = series.len(),
            current_price,
            moving_average,
            trend = %report.trend,
            "Trend analysis complete"
        );

        Ok(report)
    }

    /// Analyze several commodities concurrently
    ///
    /// Each analysis is independent; outcomes are returned in input order.
    pub async fn analyze_many<S: AsRef<str>>(
        &self,
        commodities: &[S],
    ) -> Vec<(String, Result<TrendReport>)> {
        let tasks = commodities.iter().map(|name| async move {
            let name = name.as_ref();
            (name.to_string(), self.analyze_trend(name).await)
        });

        join_all(tasks).await
    }
}
