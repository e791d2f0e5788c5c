//! Error types for commodity analysis operations

use thiserror::Error;

/// Commodity analysis errors
///
/// The first four variants are the expected terminal outcomes of a trend
/// analysis. Their `Display` output is meant to be shown to a user as-is.
#[derive(Debug, Error)]
pub enum CommodityError {
    /// Commodity name has no entry in the symbol map
    #[error("No code mapping found for {0}.")]
    NotConfigured(String),

    /// Upstream request exceeded the configured timeout
    #[error("Request to the market data API timed out for {commodity}.")]
    Timeout { commodity: String },

    /// Upstream returned a non-success status or the transport failed
    #[error("An error occurred while fetching market data for {commodity}: {detail}")]
    FetchError { commodity: String, detail: String },

    /// Fetch succeeded but yielded no usable observations
    #[error("No data available for analysis of {commodity}.")]
    NoData { commodity: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommodityError {
    /// Stable snake_case tag for the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured(_) => "not_configured",
            Self::Timeout { .. } => "timeout",
            Self::FetchError { .. } => "fetch_error",
            Self::NoData { .. } => "no_data",
            Self::ConfigError(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }

    /// Whether this is one of the normal outcomes of a trend analysis,
    /// as opposed to a setup or environment failure
    pub fn is_analysis_outcome(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured(_) | Self::Timeout { .. } | Self::FetchError { .. } | Self::NoData { .. }
        )
    }

}

/// Configuration files that fail to load or parse
impl From<anyhow::Error> for CommodityError {
    fn from(err: anyhow::Error) -> Self {
        CommodityError::ConfigError(format!("{err:#}"))
    }
}

/// Result type alias for commodity operations
pub type Result<T> = std::result::Result<T, CommodityError>;

/// Convert CommodityError to agent_core::Error
impl From<CommodityError> for agent_core::Error {
    fn from(err: CommodityError) -> Self {
        agent_core::Error::ProcessingFailed(err.to_string())
    }
}
