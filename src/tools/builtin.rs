use crate::tools::{profile, Tool, ToolError};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Returns the static portfolio payload. Takes no input.
pub struct GetMyInfoTool;

impl Tool for GetMyInfoTool {
    fn name(&self) -> &str {
        "GetMyInfo"
    }
    fn description(&self) -> &str {
        "Get information about me: profile, skills, experience, education and projects"
    }
    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
    fn execute(&self, _args: Value) -> Result<Value, ToolError> {
        Ok(profile::payload())
    }
}

pub struct GreetUserTool;

impl Tool for GreetUserTool {
    fn name(&self) -> &str {
        "GreetUser"
    }
    fn description(&self) -> &str {
        "Greets the user by name"
    }
    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name of the person to greet" }
            },
            "required": ["name"]
        })
    }
    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let name = args["name"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("name is required".to_string()))?;
        Ok(Value::String(format!("Hello, {}! What's up?", name)))
    }
}

pub struct GetCurrentDateTimeTool;

impl Tool for GetCurrentDateTimeTool {
    fn name(&self) -> &str {
        "GetCurrentDateTime"
    }
    fn description(&self) -> &str {
        "Get the current date and time data"
    }
    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
    fn execute(&self, _args: Value) -> Result<Value, ToolError> {
        let now = OffsetDateTime::now_utc();
        let stamp = now.format(&Rfc3339).unwrap_or_else(|_| now.to_string());
        Ok(Value::String(stamp))
    }
}
