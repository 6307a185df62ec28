//! Per-feature chat transcript

use serde::{Deserialize, Serialize};

/// Fixed reply appended after every user message until a real assistant
/// backend is wired in.
pub const ASSISTANT_PLACEHOLDER: &str = "AI response will come here later 🤖";

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Append-only conversation for one visit to a feature screen (Entity)
///
/// Created with a single assistant greeting; dropped when the screen closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    feature: String,
    entries: Vec<ChatEntry>,
}

impl ChatTranscript {
    pub fn new(feature: impl Into<String>) -> Self {
        let feature = feature.into();
        let greeting = format!("Welcome to {}! Ask me anything.", feature);
        Self {
            feature,
            entries: vec![ChatEntry::assistant(greeting)],
        }
    }

    /// Append a user message followed by the placeholder reply.
    ///
    /// Blank input is ignored. Returns whether anything was appended.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.entries.push(ChatEntry::user(text));
        self.entries.push(ChatEntry::assistant(ASSISTANT_PLACEHOLDER));
        true
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
