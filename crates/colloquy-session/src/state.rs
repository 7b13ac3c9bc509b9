//! Generation state machine.
//!
//! Replaces the boolean "is generating" flag with an explicit machine.
//! Idle state is driven by the *content* of the durable turn log, not by
//! completion of the backend call: the machine leaves `Streaming` only when
//! a terminal-kind turn is observed.

use std::sync::Mutex;

use colloquy_core::types::TurnKind;

use crate::error::SessionError;

/// Where the controller is in a generation round trip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// No round trip in flight; submit and reset affordances enabled.
    #[default]
    Idle,
    /// A submission was dispatched and the backend call has not resolved.
    Submitting,
    /// The call resolved but the backend may still stream durable turns;
    /// ends when a terminal-kind turn lands in the log.
    Streaming,
}

/// Thread-safe gate around [`GenerationState`].
///
/// Transitions: `begin` (Idle -> Submitting), `resolved`
/// (Submitting -> Streaming), `observe` of a terminal kind (any -> Idle),
/// `reset` (any -> Idle). Invalid transitions are no-ops except `begin`,
/// which enforces single-flight.
#[derive(Debug, Default)]
pub struct GenerationGate {
    state: Mutex<GenerationState>,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn current(&self) -> GenerationState {
        self.state.lock().map(|s| *s).unwrap_or(GenerationState::Idle)
    }

    /// Whether a round trip is in flight (submit/reset affordances disabled).
    pub fn is_generating(&self) -> bool {
        self.current() != GenerationState::Idle
    }

    /// Start a round trip: Idle -> Submitting.
    ///
    /// Returns [`SessionError::Busy`] when one is already in flight.
    pub fn begin(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;
        if *state != GenerationState::Idle {
            return Err(SessionError::Busy);
        }
        *state = GenerationState::Submitting;
        Ok(())
    }

    /// The backend call resolved: Submitting -> Streaming.
    ///
    /// A no-op in any other state (a reset may have raced the resolution).
    pub fn resolved(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;
        if *state == GenerationState::Submitting {
            *state = GenerationState::Streaming;
        }
        Ok(())
    }

    /// A durable turn of `kind` was appended; terminal kinds end the round
    /// trip from any non-idle state.
    pub fn observe(&self, kind: TurnKind) -> Result<(), SessionError> {
        if !kind.is_terminal() {
            return Ok(());
        }
        let mut state = self.lock()?;
        *state = GenerationState::Idle;
        Ok(())
    }

    /// Force the machine back to Idle (reset, or a failed backend call).
    pub fn reset(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;
        *state = GenerationState::Idle;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, GenerationState>, SessionError> {
        self.state
            .lock()
            .map_err(|e| SessionError::State(format!("generation state lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
