//! Essay draft domain model.

use serde::{Deserialize, Serialize};

/// Minimum accepted essay length, in characters.
pub const MIN_ESSAY_CHARS: usize = 500;

/// Maximum accepted essay length, in characters.
pub const MAX_ESSAY_CHARS: usize = 4000;

/// Draft and submission state for the essay form.
///
/// `submitted_ids` keeps the server-issued essay ids in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayState {
    pub essay_text: String,
    pub submitted_ids: Vec<String>,
    pub is_loading: bool,
    pub error: String,
}

impl EssayState {
    /// Creates a new essay state with empty defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft length in Unicode scalar values, not bytes.
    pub fn character_count(&self) -> usize {
        self.essay_text.chars().count()
    }

    pub fn is_text_too_short(&self) -> bool {
        self.character_count() < MIN_ESSAY_CHARS
    }

    pub fn is_text_too_long(&self) -> bool {
        self.character_count() > MAX_ESSAY_CHARS
    }

    /// Clears the draft and the transient flags. Submitted ids are kept.
    pub fn reset(&mut self) {
        self.essay_text.clear();
        self.is_loading = false;
        self.error.clear();
    }
}
