use crate::config::ProviderConfig;
use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn on the chat-completions wire. `tool_calls` is kept as raw
/// JSON: the agent only ever reads `id`, `function.name` and
/// `function.arguments` out of it, and providers disagree on the rest.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Value>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain("assistant", content)
    }

    pub fn tool(name: &str, call_id: &str, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            name: Some(name.to_string()),
            tool_call_id: Some(call_id.to_string()),
            tool_calls: None,
        }
    }

    fn plain(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            name: None,
            tool_call_id: None,
            tool_calls: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    pub r#type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// The reasoning side of the loop. One implementation talks to a real
/// OpenAI-compatible endpoint; tests script their own.
pub trait ChatModel {
    fn chat(&self, messages: &[Message], tools: Option<&[ToolDefinition]>) -> Result<Message>;
}

pub struct LlmClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl LlmClient {
    pub fn new(client: Client, provider: &ProviderConfig, model: &str) -> Self {
        Self {
            client,
            api_key: provider.api_key.clone(),
            api_base: provider.api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

impl ChatModel for LlmClient {
    fn chat(&self, messages: &[Message], tools: Option<&[ToolDefinition]>) -> Result<Message> {
        // Some providers reject assistant turns where both content and
        // tool_calls are null; send an empty string instead.
        let sanitized: Vec<Message> = messages
            .iter()
            .map(|m| {
                let mut m = m.clone();
                if m.content.is_none() && m.tool_calls.is_none() {
                    m.content = Some(String::new());
                }
                m
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": sanitized,
        });
        if let Some(t) = tools {
            if !t.is_empty() {
                if let Some(obj) = body.as_object_mut() {
                    obj.insert("tools".to_string(), serde_json::json!(t));
                }
            }
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| anyhow!("chat request failed: {}", e))?;

        let status = response.status();
        let val: Value = response
            .json()
            .map_err(|e| anyhow!("chat response was not JSON ({}): {}", status, e))?;

        // Providers report errors in the body, sometimes with a 200.
        if let Some(error) = val.get("error") {
            let msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown provider error");
            let code = error
                .get("code")
                .map(|c| c.to_string())
                .unwrap_or_else(|| "no code".to_string());
            return Err(anyhow!("provider error ({}): {}", code, msg));
        }
        if !status.is_success() {
            return Err(anyhow!("chat request failed with status {}", status));
        }

        let chat: ChatResponse = serde_json::from_value(val)
            .map_err(|e| anyhow!("unexpected chat response shape: {}", e))?;
        chat.choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| anyhow!("no choices in chat response"))
    }
}
