//! Commodity market tools for agent-rs
//!
//! The core is a trend analysis pipeline:
//!
//! 1. resolve a commodity name to a dataset code ([`CommoditySymbolMap`])
//! 2. fetch recent prices under a hard timeout ([`QuandlClient`])
//! 3. average the most recent observations ([`PriceSeries`])
//! 4. classify the latest price as bullish or bearish ([`TrendReport`])
//!
//! Around it sit small tool adapters ([`tools`]) implementing
//! [`agent_tools::Tool`] so an orchestrator can call them uniformly.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_commodity::{CommoditySymbolMap, TrendAnalyzer, TrendConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(TrendConfig::from_env()?);
//!     let symbols = Arc::new(CommoditySymbolMap::builtin());
//!     let analyzer = TrendAnalyzer::with_quandl(symbols, config)?;
//!
//!     let report = analyzer.analyze_trend("Brent").await?;
//!     println!("{} is {}", report.commodity, report.trend);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod series;
pub mod symbols;
pub mod tools;

pub use analysis::{Trend, TrendReport, moving_average};
pub use analyzer::TrendAnalyzer;
pub use api::{MarketDataSource, QuandlClient, SourceError};
pub use config::TrendConfig;
pub use error::{CommodityError, Result};
pub use series::{DateWindow, Observation, PriceSeries};
pub use symbols::CommoditySymbolMap;
pub use tools::{
    CacheReadTool, FileReadTool, KeywordGeneratorTool, MarketAnalysisTool, ResearchCache,
    SentimentAnalysisTool,
};
