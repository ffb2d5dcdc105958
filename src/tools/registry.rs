use crate::agent::llm::{FunctionDefinition, ToolDefinition};
use crate::tools::{Tool, ToolError};
use serde_json::Value;
use std::collections::HashMap;

/// Immutable-after-construction lookup table of tools.
///
/// Registration order is preserved so the definitions presented to the
/// model are stable across runs.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Names must be unique; a duplicate registration is a programming
    /// error in driver setup and panics rather than shadowing silently.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            panic!("duplicate tool registration: {}", name);
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                r#type: "function".to_string(),
                function: FunctionDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters(),
                },
            })
            .collect()
    }

    pub fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let idx = self
            .index
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        self.tools[*idx].execute(args)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
