//! Tool for analyzing commodity market trends

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::analyzer::TrendAnalyzer;
use crate::error::Result;

/// Tool wrapping [`TrendAnalyzer::analyze_trend`]
///
/// Unknown commodities, timeouts, upstream failures and empty series are
/// ordinary answers for the caller, so they come back as values carrying an
/// `error` tag and a readable `message`.
pub struct MarketAnalysisTool {
    analyzer: TrendAnalyzer,
}

#[derive(Debug, Deserialize)]
struct MarketAnalysisParams {
    commodity: String,
}

impl MarketAnalysisTool {
    /// Create a new market analysis tool
    pub fn new(analyzer: TrendAnalyzer) -> Self {
        Self { analyzer }
    }

    async fn analyze(&self, params: MarketAnalysisParams) -> Result<Value> {
        let commodity = params.commodity;

        match self.analyzer.analyze_trend(&commodity).await {
            Ok(report) => Ok(serde_json::to_value(report)?),
            Err(err) if err.is_analysis_outcome() => Ok(json!({
                "commodity": commodity,
                "error": err.kind(),
                "message": err.to_string(),
            })),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl Tool for MarketAnalysisTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: MarketAnalysisParams =
            serde_json::from_value(params).map_err(|e| agent_core::Error::invalid_params(&e))?;

        Ok(self.analyze(params).await?)
    }

    fn name(&self) -> &'static str {
        "market_analysis"
    }

    fn description(&self) -> &'static str {
        "Analyzes the market trend of a commodity. Compares the latest price with \
         its moving average over recent observations and reports bullish or bearish."
    }

    fn input_schema(&self) -> Value {
        let known: Vec<&str> = self
            .analyzer
            .symbols()
            .entries()
            .map(|(name, _)| name)
            .collect();

        json!({
            "type": "object",
            "properties": {
                "commodity": {
                    "type": "string",
                    "description": "Commodity name, matched exactly (e.g., 'Brent', 'Gold')",
                    "examples": known
                }
            },
            "required": ["commodity"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockMarketDataSource, SourceError};
    use crate::config::TrendConfig;
    use crate::series::{Observation, PriceSeries};
    use crate::symbols::CommoditySymbolMap;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn tool(source: MockMarketDataSource) -> MarketAnalysisTool {
        let config = Arc::new(TrendConfig::builder().api_key("test").build().unwrap());
        let analyzer = TrendAnalyzer::new(
            Arc::new(CommoditySymbolMap::builtin()),
            Arc::new(source),
            config,
        );
        MarketAnalysisTool::new(analyzer)
    }

    #[test]
    fn test_tool_metadata() {
        let tool = tool(MockMarketDataSource::new());

        assert_eq!(tool.name(), "market_analysis");
        assert!(!tool.description().is_empty());

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"][0], "commodity");
        assert!(
            schema["properties"]["commodity"]["examples"]
                .as_array()
                .unwrap()
                .contains(&json!("Brent"))
        );
    }

    #[tokio::test]
    async fn test_execute_success() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let series = PriceSeries::new(vec![
            Observation::new(day(9), 80.0),
            Observation::new(day(10), 84.0),
        ]);

        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch_series()
            .times(1)
            .returning(move |_, _| Ok(series.clone()));

        let out = tool(source)
            .execute(json!({ "commodity": "Brent" }))
            .await
            .unwrap();

        assert_eq!(
            out,
            json!({
                "commodity": "Brent",
                "currentPrice": 84.0,
                "movingAverage": 82.0,
                "trend": "bullish"
            })
        );
    }

    #[tokio::test]
    async fn test_execute_reports_outcomes_as_values() {
        let mut source = MockMarketDataSource::new();
        source.expect_fetch_series().times(0);

        let out = tool(source)
            .execute(json!({ "commodity": "Unobtainium" }))
            .await
            .unwrap();
        assert_eq!(out["error"], "not_configured");
        assert_eq!(out["message"], "No code mapping found for Unobtainium.");

        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch_series()
            .returning(|_, _| Err(SourceError::Timeout));
        let out = tool(source)
            .execute(json!({ "commodity": "WTI" }))
            .await
            .unwrap();
        assert_eq!(out["commodity"], "WTI");
        assert_eq!(out["error"], "timeout");
    }

    #[tokio::test]
    async fn test_execute_invalid_params() {
        let err = tool(MockMarketDataSource::new())
            .execute(json!({ "symbol": "Gold" }))
            .await
            .unwrap_err();

        assert!(matches!(err, agent_core::Error::InvalidInput(_)));
    }
}
