//! Tool for reading a file's content

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Tool returning the content of one configured file
///
/// The path is fixed when the tool is built; callers cannot point it
/// elsewhere.
pub struct FileReadTool {
    path: PathBuf,
}

impl FileReadTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Value> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "Read file");

        Ok(json!({
            "path": self.path.display().to_string(),
            "content": content,
        }))
    }
}

#[async_trait]
impl Tool for FileReadTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        Ok(self.read().await?)
    }

    fn name(&self) -> &'static str {
        "file_read"
    }

    fn description(&self) -> &'static str {
        "Reads the content of a configured file, such as a saved research report."
    }

    fn input_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
}
