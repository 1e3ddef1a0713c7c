//! In-memory conversation kept by the chat loop.

use neurosync_types::chat::{ChatRole, ChatTurn};

/// Ordered turns of one session, with an optional pinned system prompt.
#[derive(Debug, Default)]
pub struct Conversation {
    system: Option<ChatTurn>,
    turns: Vec<ChatTurn>,
    /// Last user input that did not get a reply.
    unsent: Option<String>,
}

impl Conversation {
    pub fn new(system: Option<&str>) -> Self {
        Self {
            system: system
                .filter(|s| !s.trim().is_empty())
                .map(ChatTurn::system),
            ..Self::default()
        }
    }

    /// Append a user turn and return the full payload to send.
    pub fn begin_turn(&mut self, text: &str) -> Vec<ChatTurn> {
        self.turns.push(ChatTurn::user(text));
        self.system.iter().chain(self.turns.iter()).cloned().collect()
    }

    /// Record the assistant reply for the pending turn.
    pub fn complete_turn(&mut self, reply: String) {
        self.unsent = None;
        self.turns.push(ChatTurn::assistant(reply));
    }

    /// Drop the pending user turn and keep its text for a retry.
    pub fn abort_turn(&mut self) {
        if matches!(self.turns.last(), Some(t) if t.role == ChatRole::User) {
            if let Some(turn) = self.turns.pop() {
                self.unsent = Some(turn.content);
            }
        }
    }

    pub fn take_unsent(&mut self) -> Option<String> {
        self.unsent.take()
    }

    pub fn reset(&mut self) {
        self.turns.clear();
        self.unsent = None;
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}
