//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Uniform call interface for tool adapters
///
/// An orchestrator only ever sees this trait: it reads the name, description
/// and input schema to decide what to call, then hands JSON parameters to
/// [`Tool::execute`] and receives JSON back.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value. Expected domain outcomes are reported in
    /// the returned value; `Err` is reserved for calls that could not be
    /// carried out at all (bad parameters, I/O failures).
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "commodity": { "type": "string" }
    ///     },
    ///     "required": ["commodity"]
    /// });
    /// assert_eq!(schema["required"][0], "commodity");
    /// ```
    fn input_schema(&self) -> Value;
}
