use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many prior turns the assistant sends as conversational context.
/// Older turns are dropped by plain truncation, no summarization.
pub const HISTORY_WINDOW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of a conversation with the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A citizen's running conversation with the portal assistant.
///
/// The full transcript is kept for the session's lifetime; only the last
/// [`HISTORY_WINDOW`] turns are replayed to the model on each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    id: String,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            turns: Vec::new(),
        }
    }

    /// Reconstitutes from persisted turns (used by the CLI `--history` path).
    pub fn from_turns(turns: Vec<ChatTurn>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            turns,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// The rolling context window: the last [`HISTORY_WINDOW`] turns.
    pub fn window(&self) -> &[ChatTurn] {
        let skip = self.turns.len().saturating_sub(HISTORY_WINDOW);
        &self.turns[skip..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
