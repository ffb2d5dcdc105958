pub mod builtin;
pub mod fetch;
pub mod profile;
pub mod registry;

use serde_json::Value;
use thiserror::Error;

/// A named capability the reasoning model may invoke.
///
/// `parameters` describes the expected argument shape as a JSON schema
/// object. Data-fetching tools must not fail on network or parse errors;
/// they return their empty sentinel (`{}` or `[]`) instead, so the model
/// can decide how to answer. Only contract violations (unknown tool name,
/// missing/ill-typed arguments) surface as `ToolError`.
pub trait Tool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Value;
    fn execute(&self, args: Value) -> Result<Value, ToolError>;
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
