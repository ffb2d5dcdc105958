pub mod llm;
pub mod state;

use crate::agent::llm::{ChatModel, Message};
use crate::agent::state::ConversationState;
use crate::tools::registry::ToolRegistry;
use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info, warn};

const SYSTEM_PROMPT: &str = "You are a portfolio assistant. You answer questions about \
     the portfolio owner using the GetMyInfo tool, and you can greet users, report the \
     current date and time, and look up users, todos and weather through the other tools. \
     When a tool result is empty ({} or []), tell the user the information could not be \
     retrieved. Keep answers brief.";

/// Answer returned when the model never produces a usable reply within
/// the iteration budget.
const EXHAUSTED_FALLBACK: &str =
    "I wasn't able to finish answering that within my tool-call budget. Please try rephrasing.";

/// Tool-use loop: ask the model, run whatever tools it requests, feed the
/// observations back, repeat until it answers in plain text or the
/// iteration cap is hit.
pub struct Agent {
    model: Box<dyn ChatModel>,
    tools: ToolRegistry,
    max_iterations: usize,
}

impl Agent {
    pub fn new(model: Box<dyn ChatModel>, tools: ToolRegistry, max_iterations: usize) -> Self {
        Self {
            model,
            tools,
            // A zero cap would answer nothing, ever.
            max_iterations: max_iterations.max(1),
        }
    }

    /// Run one conversational turn. `state` only ever receives the user
    /// turn and the final assistant turn; tool-call traffic stays in the
    /// working context of this call.
    pub fn run(&self, state: &mut ConversationState, user_input: &str) -> Result<String> {
        let mut context = Vec::with_capacity(state.len() + 2);
        context.push(Message::system(SYSTEM_PROMPT));
        context.extend(state.snapshot());

        let user_message = Message::user(user_input);
        context.push(user_message.clone());
        state.append(user_message);

        // Everything before this index is prior-turn history; the answer
        // must come from messages produced during this turn only.
        let turn_start = context.len();

        let definitions = self.tools.definitions();
        let mut iteration = 0;
        let mut exhausted = true;

        while iteration < self.max_iterations {
            iteration += 1;
            let response = self.model.chat(&context, Some(&definitions))?;
            context.push(response.clone());

            let calls = response
                .tool_calls
                .as_ref()
                .and_then(|tc| tc.as_array())
                .cloned();
            match calls {
                Some(calls) => {
                    // Sequential, in request order, so observations land
                    // deterministically even if the model asked for
                    // several tools at once.
                    for call in &calls {
                        let observation = self.run_tool_call(call);
                        context.push(observation);
                    }
                }
                None => {
                    exhausted = false;
                    break;
                }
            }
        }

        if exhausted {
            warn!(iterations = iteration, "iteration cap reached");
        }

        let mut answer = latest_assistant_text(&context[turn_start..]);

        // No usable reply this turn: force one last completion with tools
        // withheld so the model has to answer in text.
        if answer.is_none() {
            if let Ok(last) = self.model.chat(&context, None) {
                context.push(last.clone());
                answer = last.content.filter(|c| !c.trim().is_empty());
                if answer.is_some() {
                    info!("tools-withheld completion produced the answer");
                }
            }
        }

        let answer = answer.unwrap_or_else(|| EXHAUSTED_FALLBACK.to_string());
        state.append(Message::assistant(answer.clone()));
        Ok(answer)
    }

    /// Execute one requested tool call and package the outcome as a tool
    /// observation. Failures (unknown name, bad arguments, unparseable
    /// argument payload) become error text for the model, never faults.
    fn run_tool_call(&self, call: &Value) -> Message {
        let id = call.get("id").and_then(|v| v.as_str()).unwrap_or("");
        let name = call
            .get("function")
            .and_then(|f| f.get("name"))
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let args_str = call
            .get("function")
            .and_then(|f| f.get("arguments"))
            .and_then(|v| v.as_str())
            .unwrap_or("{}");

        info!(tool = name, args = args_str, "tool call");

        let observation = match serde_json::from_str::<Value>(args_str) {
            Ok(args) => match self.tools.execute(name, args) {
                Ok(result) => {
                    serde_json::to_string(&result).unwrap_or_else(|e| format!("Error: {}", e))
                }
                Err(e) => format!("Error: {}", e),
            },
            Err(e) => format!("Error: malformed tool arguments: {}", e),
        };
        debug!(tool = name, observation = observation.as_str(), "tool result");

        Message::tool(name, id, observation)
    }
}

/// Most recent assistant turn carrying actual text; turns that only
/// request tools are skipped.
fn latest_assistant_text(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .rev()
        .filter(|m| m.role == "assistant")
        .find_map(|m| {
            m.content
                .as_ref()
                .filter(|c| !c.trim().is_empty())
                .cloned()
        })
}
