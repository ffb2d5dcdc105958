use crate::tools::{Tool, ToolError};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};
use tracing::warn;

/// Send a GET request and parse the body as JSON. Connection failures,
/// non-2xx statuses and malformed payloads each degrade to `sentinel`
/// with a warn trace. This is deliberately lossy: a missing record, an
/// outage and an empty result all look the same to the model. No retry,
/// no caching; every invocation re-fetches.
fn fetch_json(request: RequestBuilder, label: &str, sentinel: Value) -> Value {
    let response = match request.send() {
        Ok(r) => r,
        Err(e) => {
            warn!(tool = label, error = %e, "fetch failed");
            return sentinel;
        }
    };
    let status = response.status();
    if !status.is_success() {
        warn!(tool = label, %status, "fetch returned non-success status");
        return sentinel;
    }
    match response.json::<Value>() {
        Ok(v) => v,
        Err(e) => {
            warn!(tool = label, error = %e, "fetch returned malformed JSON");
            sentinel
        }
    }
}

fn require_id(args: &Value) -> Result<i64, ToolError> {
    match &args["id"] {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ToolError::InvalidArguments("id must be an integer".to_string())),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ToolError::InvalidArguments("id must be an integer".to_string())),
        _ => Err(ToolError::InvalidArguments("id is required".to_string())),
    }
}

fn id_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": "Record id" }
        },
        "required": ["id"]
    })
}

fn no_parameters() -> Value {
    json!({ "type": "object", "properties": {} })
}

pub struct GetUserTool {
    pub client: Client,
    pub base_url: String,
}

impl Tool for GetUserTool {
    fn name(&self) -> &str {
        "GetUser"
    }
    fn description(&self) -> &str {
        "Get user by given id"
    }
    fn parameters(&self) -> Value {
        id_parameters()
    }
    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let id = require_id(&args)?;
        let url = format!("{}/users/{}", self.base_url, id);
        Ok(fetch_json(self.client.get(url), self.name(), json!({})))
    }
}

pub struct FetchUsersTool {
    pub client: Client,
    pub base_url: String,
}

impl Tool for FetchUsersTool {
    fn name(&self) -> &str {
        "FetchUsers"
    }
    fn description(&self) -> &str {
        "Fetch the users. It doesn't take any input."
    }
    fn parameters(&self) -> Value {
        no_parameters()
    }
    fn execute(&self, _args: Value) -> Result<Value, ToolError> {
        let url = format!("{}/users", self.base_url);
        Ok(fetch_json(self.client.get(url), self.name(), json!([])))
    }
}

pub struct FetchTodosTool {
    pub client: Client,
    pub base_url: String,
}

impl Tool for FetchTodosTool {
    fn name(&self) -> &str {
        "FetchTodos"
    }
    fn description(&self) -> &str {
        "Fetch the todos. It doesn't take any input."
    }
    fn parameters(&self) -> Value {
        no_parameters()
    }
    fn execute(&self, _args: Value) -> Result<Value, ToolError> {
        let url = format!("{}/todos", self.base_url);
        Ok(fetch_json(self.client.get(url), self.name(), json!([])))
    }
}

pub struct FetchTodoByIdTool {
    pub client: Client,
    pub base_url: String,
}

impl Tool for FetchTodoByIdTool {
    fn name(&self) -> &str {
        "FetchTodoById"
    }
    fn description(&self) -> &str {
        "Fetch the todo by id. It takes an integer id as input."
    }
    fn parameters(&self) -> Value {
        id_parameters()
    }
    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let id = require_id(&args)?;
        let url = format!("{}/todos/{}", self.base_url, id);
        Ok(fetch_json(self.client.get(url), self.name(), json!({})))
    }
}

pub struct FetchCurrentWeatherTool {
    pub client: Client,
    pub base_url: String,
    pub api_key: String,
}

impl Tool for FetchCurrentWeatherTool {
    fn name(&self) -> &str {
        "FetchCurrentWeather"
    }
    fn description(&self) -> &str {
        "Fetch current weather information of the given city"
    }
    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name" }
            },
            "required": ["city"]
        })
    }
    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let city = args["city"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("city is required".to_string()))?;
        let url = format!("{}/current.json", self.base_url);
        let request = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("q", city)]);
        Ok(fetch_json(request, self.name(), json!({})))
    }
}
