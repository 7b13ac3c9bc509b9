use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Who produced a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// The human asking questions.
    User,
    /// The generation backend answering them.
    Assistant,
}

/// The kind of content a turn carries.
///
/// Kinds are the wire-level stage markers emitted by the generation backend.
/// `Followup` and `Inquiry` are terminal: observing one in the durable log
/// means the backend has finished streaming for the current round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    /// Raw user input.
    Input,
    /// An answer section produced by the backend.
    Response,
    /// Related queries suggested by the backend.
    Related,
    /// Follow-up panel; terminal.
    Followup,
    /// Clarifying question back to the user; terminal.
    Inquiry,
}

impl TurnKind {
    /// Whether this kind marks the end of a generation stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnKind::Followup | TurnKind::Inquiry)
    }
}

// =============================================================================
// Turn
// =============================================================================

/// One durable entry in the conversation log.
///
/// Identity is assigned at creation and never reused. The log is append-only
/// during a session and replaced wholesale only by a reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identity within the session.
    pub id: Uuid,
    pub role: TurnRole,
    pub content: String,
    pub kind: TurnKind,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a user input turn with a fresh identity.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: TurnRole::User,
            content: content.into(),
            kind: TurnKind::Input,
            created_at: Utc::now(),
        }
    }

    /// Create an assistant turn of the given kind with a fresh identity.
    pub fn assistant(content: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: TurnRole::Assistant,
            content: content.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// InitialState
// =============================================================================

/// State handed to the session controller once at mount.
///
/// The surrounding page supplies a freshly generated session id and any
/// messages restored from storage (empty for a new conversation).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InitialState {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<Turn>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- TurnKind ----

    #[test]
    fn test_terminal_kinds() {
        assert!(TurnKind::Followup.is_terminal());
        assert!(TurnKind::Inquiry.is_terminal());
        assert!(!TurnKind::Input.is_terminal());
        assert!(!TurnKind::Response.is_terminal());
        assert!(!TurnKind::Related.is_terminal());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TurnKind::Followup).unwrap(),
            "\"followup\""
        );
        assert_eq!(
            serde_json::to_string(&TurnKind::Inquiry).unwrap(),
            "\"inquiry\""
        );
        assert_eq!(serde_json::to_string(&TurnKind::Input).unwrap(), "\"input\"");
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: TurnKind = serde_json::from_str("\"response\"").unwrap();
        assert_eq!(kind, TurnKind::Response);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&TurnRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    // ---- Turn ----

    #[test]
    fn test_user_turn_fields() {
        let turn = Turn::user("hello");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.kind, TurnKind::Input);
        assert_eq!(turn.content, "hello");
    }

    #[test]
    fn test_assistant_turn_fields() {
        let turn = Turn::assistant("answer", TurnKind::Response);
        assert_eq!(turn.role, TurnRole::Assistant);
        assert_eq!(turn.kind, TurnKind::Response);
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let a = Turn::user("same content");
        let b = Turn::user("same content");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_turn_json_roundtrip() {
        let turn = Turn::assistant("body", TurnKind::Followup);
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"followup\""));
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }

    // ---- InitialState ----

    #[test]
    fn test_initial_state_default_is_empty() {
        let init = InitialState::default();
        assert!(init.session_id.is_empty());
        assert!(init.messages.is_empty());
    }

    #[test]
    fn test_initial_state_messages_default_when_absent() {
        let init: InitialState = serde_json::from_str("{\"session_id\":\"abc\"}").unwrap();
        assert_eq!(init.session_id, "abc");
        assert!(init.messages.is_empty());
    }
}
