//! Configuration for commodity trend analysis

use crate::error::{CommodityError, Result};
use std::fmt;
use std::time::Duration;

/// Default base URL of the market data API
pub const DEFAULT_ENDPOINT: &str = "https://www.quandl.com/api/v3";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "QUANDL_API_KEY";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "QUANDL_API_BASE";

/// Configuration for trend analysis
///
/// Supplied once at construction and shared read-only afterwards. Holds the
/// API key, so it is neither serialized nor printed in full.
#[derive(Clone)]
pub struct TrendConfig {
    /// Base URL of the market data API
    pub endpoint: String,

    /// API key sent with every request
    pub api_key: String,

    /// Hard upper bound on a single fetch
    pub request_timeout: Duration,

    /// Calendar days of history to request, ending today
    pub window_days: u32,

    /// Number of most recent observations averaged
    pub moving_average_window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(10),
            window_days: 30,
            moving_average_window: 20,
        }
    }
}

impl fmt::Debug for TrendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("window_days", &self.window_days)
            .field("moving_average_window", &self.moving_average_window)
            .finish()
    }
}

impl TrendConfig {
    /// Create a new configuration builder
    pub fn builder() -> TrendConfigBuilder {
        TrendConfigBuilder::default()
    }

    /// Build a configuration from `QUANDL_API_KEY` and, if set, `QUANDL_API_BASE`
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(CommodityError::ConfigError(format!(
                "API key required (set {API_KEY_ENV})"
            )));
        }

        if url::Url::parse(&self.endpoint).is_err() {
            return Err(CommodityError::ConfigError(format!(
                "endpoint is not a valid URL: {}",
                self.endpoint
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(CommodityError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.window_days == 0 {
            return Err(CommodityError::ConfigError(
                "window_days must be greater than 0".to_string(),
            ));
        }

        if self.moving_average_window == 0 {
            return Err(CommodityError::ConfigError(
                "moving_average_window must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for TrendConfig
#[derive(Default)]
pub struct TrendConfigBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    request_timeout: Option<Duration>,
    window_days: Option<u32>,
    moving_average_window: Option<usize>,
}

impl fmt::Debug for TrendConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendConfigBuilder")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .field("window_days", &self.window_days)
            .field("moving_average_window", &self.moving_average_window)
            .finish()
    }
}

impl TrendConfigBuilder {
    /// Set the API base URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the request timeout in whole seconds
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.request_timeout(Duration::from_secs(secs))
    }

    /// Set the lookback window in calendar days
    pub fn window_days(mut self, days: u32) -> Self {
        self.window_days = Some(days);
        self
    }

    /// Set the moving average window
    pub fn moving_average_window(mut self, window: usize) -> Self {
        self.moving_average_window = Some(window);
        self
    }

    /// Fill the API key and endpoint from the environment
    ///
    /// Values set explicitly on the builder take precedence.
    pub fn with_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = agent_utils::env_var(API_KEY_ENV);
        }
        if self.endpoint.is_none() {
            self.endpoint = agent_utils::env_var(API_BASE_ENV);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TrendConfig> {
        let defaults = TrendConfig::default();

        let config = TrendConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            api_key: self.api_key.unwrap_or(defaults.api_key),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            window_days: self.window_days.unwrap_or(defaults.window_days),
            moving_average_window: self
                .moving_average_window
                .unwrap_or(defaults.moving_average_window),
        };

        config.validate()?;
        Ok(config)
    }
}
