//! Tool exposing results gathered earlier in a session

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// Shared, read-only list of research results
#[derive(Debug, Clone, Default)]
pub struct ResearchCache {
    entries: Arc<Vec<Value>>,
}

impl ResearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with existing entries
    pub fn with_entries(entries: Vec<Value>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Load entries from a JSON array file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let entries: Vec<Value> = agent_utils::load_json_file(path)?;
        Ok(Self::with_entries(entries))
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }
}

/// Tool returning everything in a [`ResearchCache`]
pub struct CacheReadTool {
    cache: ResearchCache,
}

impl CacheReadTool {
    pub fn new(cache: ResearchCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl Tool for CacheReadTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        let entries = self.cache.entries();
        Ok(json!({ "count": entries.len(), "entries": entries }))
    }

    fn name(&self) -> &'static str {
        "cache_read"
    }

    fn description(&self) -> &'static str {
        "Reads results collected earlier by other researchers in this session."
    }

    fn input_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
}
