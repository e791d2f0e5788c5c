//! Market data sources

pub mod quandl;

pub use quandl::QuandlClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::series::{DateWindow, PriceSeries};

/// Failure to obtain a series from a data source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request exceeded its time bound
    #[error("request timed out")]
    Timeout,

    /// The source answered with a non-success status
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The request could not be completed
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = err.status() {
            return Self::Status(status);
        }
        // The URL carries the API key
        Self::Transport(err.without_url().to_string())
    }
}

/// Source of dated price series
///
/// Implementations must return the series most recent first. Building it
/// through [`PriceSeries::new`] or [`PriceSeries::from_dataset`] sorts fully
/// dated series by date; if any row has no usable date the upstream order is
/// trusted as most recent first. Each call performs at most one request and
/// never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the series for a dataset code within the window
    async fn fetch_series(
        &self,
        code: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries, SourceError>;
}
