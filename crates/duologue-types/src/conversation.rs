//! Conversation turn types.

use serde::{Deserialize, Serialize};

/// One persona's output for one turn of the simulated conversation.
///
/// Turns are produced sequentially; only the latest turn's message is
/// carried forward as the next persona's input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Name of the persona that produced this message.
    pub speaker: String,
    pub message: String,
}

impl ConversationTurn {
    pub fn new(speaker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
        }
    }
}
