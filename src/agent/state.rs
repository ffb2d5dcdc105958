use crate::agent::llm::Message;

/// Append-only conversation history for a single session.
///
/// Owned by the driver and handed into every [`Agent::run`] call; lives
/// exactly as long as the process. Nothing is trimmed or persisted.
///
/// [`Agent::run`]: crate::agent::Agent::run
#[derive(Debug, Default, Clone)]
pub struct ConversationState {
    messages: Vec<Message>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// An owned copy of the history in chronological order. Mutating the
    /// returned vector has no effect on the state itself.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
