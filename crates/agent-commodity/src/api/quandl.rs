//! Quandl (Nasdaq Data Link) dataset client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{MarketDataSource, SourceError};
use crate::config::TrendConfig;
use crate::error::{CommodityError, Result};
use crate::series::{DateWindow, PriceSeries};

/// HTTP client for `<endpoint>/datasets/<code>/data.json`
#[derive(Debug, Clone)]
pub struct QuandlClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl QuandlClient {
    /// Create a client whose requests are bounded by the configured timeout
    pub fn new(config: &TrendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CommodityError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Dataset URL for a code, scoped to the window
    pub fn dataset_url(
        &self,
        code: &str,
        window: &DateWindow,
    ) -> std::result::Result<Url, SourceError> {
        let mut url = Url::parse(&format!("{}/datasets/{code}/data.json", self.endpoint))
            .map_err(|e| SourceError::Transport(format!("invalid dataset URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("start_date", &window.start_param())
            .append_pair("end_date", &window.end_param());

        Ok(url)
    }
}

#[async_trait]
impl MarketDataSource for QuandlClient {
    async fn fetch_series(
        &self,
        code: &str,
        window: &DateWindow,
    ) -> std::result::Result<PriceSeries, SourceError> {
        let url = self.dataset_url(code, window)?;

        debug!(code, start = %window.start, end = %window.end, "Requesting dataset");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let document: Value = response.json().await?;
        let series = PriceSeries::from_dataset(&document);

        debug!(code, points = series.len(), "Parsed dataset");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client(endpoint: &str) -> QuandlClient {
        let config = TrendConfig::builder()
            .api_key("test_key")
            .endpoint(endpoint)
            .build()
            .unwrap();
        QuandlClient::new(&config).unwrap()
    }

    #[test]
    fn test_dataset_url() {
        let window = DateWindow::ending_on(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), 30);
        let url = client("https://www.quandl.com/api/v3/")
            .dataset_url("LBMA/GOLD", &window)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.quandl.com/api/v3/datasets/LBMA/GOLD/data.json\
             ?api_key=test_key&start_date=2023-12-11&end_date=2024-01-10"
        );
    }

    #[tokio::test]
    #[ignore] // Requires QUANDL_API_KEY and network access
    async fn test_fetch_gold() {
        let config = TrendConfig::from_env().unwrap();
        let client = QuandlClient::new(&config).unwrap();
        let today = chrono::Utc::now().date_naive();

        let series = client
            .fetch_series("LBMA/GOLD", &DateWindow::ending_on(today, 30))
            .await
            .unwrap();
        assert!(!series.is_empty());
    }
}
