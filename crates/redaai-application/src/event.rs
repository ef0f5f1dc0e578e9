//! Store event types.
//!
//! Stores publish these on every observable state change; consumers
//! subscribe through the stores' `subscribe()` methods. The enums are
//! serde-tagged so events can be forwarded to logs or UI bridges as-is.

use serde::{Deserialize, Serialize};

/// Events published by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A credential form field changed.
    FieldsChanged,
    /// The in-flight flag flipped.
    LoadingChanged { loading: bool },
    /// The failure message changed.
    ErrorChanged { error: Option<String> },
    /// Login succeeded and the profile was populated.
    Authenticated { email: String },
    /// The session was cleared locally.
    LoggedOut,
}

/// Events published by the essay store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EssayEvent {
    /// The draft text changed.
    TextChanged { characters: usize },
    /// The in-flight flag flipped.
    LoadingChanged { loading: bool },
    /// The failure message changed.
    ErrorChanged { error: String },
    /// A submission was accepted by the backend.
    Submitted { essay_id: String },
    /// An image transcription completed.
    Transcribed { characters: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_event_tagging() {
        let json = serde_json::to_string(&SessionEvent::LoadingChanged { loading: true }).unwrap();
        assert_eq!(json, r#"{"type":"loading_changed","loading":true}"#);

        let json = serde_json::to_string(&SessionEvent::LoggedOut).unwrap();
        assert_eq!(json, r#"{"type":"logged_out"}"#);
    }

    #[test]
    fn test_essay_event_tagging() {
        let json = serde_json::to_string(&EssayEvent::Submitted {
            essay_id: "abc123".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"submitted","essay_id":"abc123"}"#);
    }
}
