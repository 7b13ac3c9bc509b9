//! Render derivation.
//!
//! The durable turn log is the single source of truth; the transient render
//! list is a pure function of it. Nothing here holds state, so the two
//! representations can never diverge.

use colloquy_core::types::{Turn, TurnKind, TurnRole};
use serde::Serialize;

/// Opaque display unit consumed by the render sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPayload {
    /// The user's own message, echoed immediately at submission time.
    UserMessage { message: String },
    /// A backend-produced panel of the given kind.
    Reply { kind: TurnKind, content: String },
}

/// One entry in the ordered render list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderEntry {
    pub id: String,
    pub payload: RenderPayload,
}

/// Derive the render entry for a single turn.
pub fn entry_for(turn: &Turn) -> RenderEntry {
    let payload = match turn.role {
        TurnRole::User => RenderPayload::UserMessage {
            message: turn.content.clone(),
        },
        TurnRole::Assistant => RenderPayload::Reply {
            kind: turn.kind,
            content: turn.content.clone(),
        },
    };
    RenderEntry {
        id: turn.id.to_string(),
        payload,
    }
}

/// Derive the full ordered render list from the turn log.
pub fn derive(turns: &[Turn]) -> Vec<RenderEntry> {
    turns.iter().map(entry_for).collect()
}

// =============================================================================
// Tests
// =============================================================================
