//! Append-only conversation turn log
//!
//! Process-lifetime record of every user/assistant exchange, kept for
//! auditability and future context-aware suggestions. Appends are
//! monotonic; readers take a point-in-time snapshot.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the speaker in a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// User message
    User,
    /// Assistant response
    Assistant,
    /// System message
    System,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
            TurnRole::System => "system",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Unique turn id
    pub id: Uuid,
    /// Role of the speaker
    pub role: TurnRole,
    /// Content of the turn
    pub content: String,
    /// When the turn occurred
    pub timestamp: DateTime<Utc>,
    /// Intent resolved for this turn, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl ConversationTurn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            intent: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }
}

/// Bounded append-only log of conversation turns.
///
/// Once the configured capacity is reached the oldest turns are dropped,
/// keeping memory bounded for long-lived sessions.
#[derive(Debug)]
pub struct ConversationLog {
    turns: RwLock<Vec<ConversationTurn>>,
    max_turns: usize,
}

impl ConversationLog {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: RwLock::new(Vec::new()),
            max_turns: max_turns.max(1),
        }
    }

    /// Append a turn, evicting the oldest entries past capacity.
    pub fn append(&self, turn: ConversationTurn) {
        let mut turns = self.turns.write();
        turns.push(turn);
        if turns.len() > self.max_turns {
            let excess = turns.len() - self.max_turns;
            turns.drain(..excess);
        }
    }

    /// Point-in-time copy of the full log.
    pub fn snapshot(&self) -> Vec<ConversationTurn> {
        self.turns.read().clone()
    }

    /// The most recent `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> Vec<ConversationTurn> {
        let turns = self.turns.read();
        let start = turns.len().saturating_sub(n);
        turns[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.turns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.read().is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(200)
    }
}
