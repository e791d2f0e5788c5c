//! Tool scoring the sentiment of saved news articles

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::Result;

/// Separator between articles in a saved news file
pub const ARTICLE_SEPARATOR: &str = "\n\n";

/// Label attached to a scored article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Positive only for a compound score strictly above zero
    pub fn from_compound(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Split a news file into articles on blank lines, dropping empty pieces
pub fn split_articles(text: &str) -> Vec<&str> {
    text.split(ARTICLE_SEPARATOR)
        .map(str::trim)
        .filter(|article| !article.is_empty())
        .collect()
}

/// Score every article with VADER
fn score_articles(articles: &[&str]) -> Vec<Value> {
    let analyzer = SentimentIntensityAnalyzer::new();

    articles
        .iter()
        .map(|article| {
            let scores = analyzer.polarity_scores(article);
            let compound = scores.get("compound").copied().unwrap_or(0.0);

            json!({
                "article": article,
                "score": compound,
                "sentiment": Sentiment::from_compound(compound),
            })
        })
        .collect()
}

/// Tool labelling each article of one configured file positive or negative
pub struct SentimentAnalysisTool {
    path: PathBuf,
}

impl SentimentAnalysisTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn analyze(&self) -> Result<Value> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let articles = split_articles(&text);
        let results = score_articles(&articles);

        tracing::debug!(path = %self.path.display(), articles = results.len(), "Scored articles");

        Ok(json!({
            "path": self.path.display().to_string(),
            "count": results.len(),
            "results": results,
        }))
    }
}

#[async_trait]
impl Tool for SentimentAnalysisTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        Ok(self.analyze().await?)
    }

    fn name(&self) -> &'static str {
        "sentiment_analysis"
    }

    fn description(&self) -> &'static str {
        "Reads saved news articles and labels each one positive or negative."
    }

    fn input_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_articles() {
        let text = "Brent rallies\non supply cuts\n\nGold steady\n\n\n\n  \n\nSilver slips\n";
        assert_eq!(
            split_articles(text),
            vec!["Brent rallies\non supply cuts", "Gold steady", "Silver slips"]
        );
        assert!(split_articles("").is_empty());
    }

    #[test]
    fn test_zero_compound_is_negative() {
        assert_eq!(Sentiment::from_compound(0.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(-0.4), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(0.01), Sentiment::Positive);
    }

    #[tokio::test]
    async fn test_labels_each_article() {
        let path = std::env::temp_dir().join(format!("sentiment-{}.txt", std::process::id()));
        tokio::fs::write(
            &path,
            "Traders are happy: a great, strong week for gold.\n\n\
             Oil suffers a terrible, awful crash as panic spreads.",
        )
        .await
        .unwrap();

        let out = SentimentAnalysisTool::new(&path)
            .execute(json!({}))
            .await
            .unwrap();
        tokio::fs::remove_file(path).await.unwrap();

        assert_eq!(out["count"], 2);
        assert_eq!(out["results"][0]["sentiment"], "positive");
        assert_eq!(out["results"][1]["sentiment"], "negative");
        assert!(out["results"][1]["score"].as_f64().unwrap() < 0.0);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let err = SentimentAnalysisTool::new("/no/such/articles.txt")
            .execute(json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, agent_core::Error::ProcessingFailed(_)));
    }
}
