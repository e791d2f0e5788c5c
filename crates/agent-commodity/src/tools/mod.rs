//! Tool adapters exposing commodity capabilities to an orchestrator

pub mod cache_read;
pub mod file_read;
pub mod keywords;
pub mod market_analysis;
pub mod sentiment;

pub use cache_read::{CacheReadTool, ResearchCache};
pub use file_read::FileReadTool;
pub use keywords::{KeywordGeneratorTool, filter_keywords};
pub use market_analysis::MarketAnalysisTool;
pub use sentiment::{Sentiment, SentimentAnalysisTool, split_articles};
