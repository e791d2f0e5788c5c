//! Tool serving a curated keyword list for news searches

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::symbols::CommoditySymbolMap;

/// Longest keyword kept, in words
const MAX_WORDS: usize = 3;

/// Shortest keyword kept is one character longer than this
const MIN_CHARS: usize = 2;

/// Deduplicate keywords and drop ones unsuitable as search terms
///
/// Keeps the first occurrence of each keyword (after trimming), and only
/// keywords of at most three words and more than two characters.
pub fn filter_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    keywords
        .into_iter()
        .filter_map(|kw| {
            let kw = kw.as_ref().trim();
            let usable =
                kw.split_whitespace().count() <= MAX_WORDS && kw.chars().count() > MIN_CHARS;
            (usable && seen.insert(kw.to_string())).then(|| kw.to_string())
        })
        .collect()
}

/// Tool returning the filtered keyword list
///
/// The list is configured up front; the topic a caller passes is echoed
/// back but does not change the result.
pub struct KeywordGeneratorTool {
    keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct KeywordParams {
    #[serde(default)]
    topic: Option<String>,
}

impl KeywordGeneratorTool {
    /// Create the tool from a raw keyword list
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: filter_keywords(keywords),
        }
    }

    /// Use the configured commodity names as keywords
    pub fn from_symbols(symbols: &CommoditySymbolMap) -> Self {
        Self::new(symbols.entries().map(|(name, _)| name))
    }

    /// Load keywords from a JSON array of strings
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let keywords: Vec<String> = agent_utils::load_json_file(path)?;
        Ok(Self::new(keywords))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[async_trait]
impl Tool for KeywordGeneratorTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: KeywordParams = if params.is_null() {
            KeywordParams::default()
        } else {
            serde_json::from_value(params).map_err(|e| agent_core::Error::invalid_params(&e))?
        };

        tracing::debug!(count = self.keywords.len(), "Serving keywords");

        Ok(json!({
            "topic": params.topic,
            "keywords": self.keywords,
        }))
    }

    fn name(&self) -> &'static str {
        "keyword_generator"
    }

    fn description(&self) -> &'static str {
        "Returns a curated list of short search keywords for commodity market news."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "High-level topic the keywords are requested for"
                }
            }
        })
    }
}
