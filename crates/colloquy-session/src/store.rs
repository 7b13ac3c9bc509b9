//! Session state store.
//!
//! A single source-of-truth event log of durable [`Turn`]s plus session
//! identity. Mutations are whole-list replacements: the log lives behind an
//! `Arc` and every append produces a new list, so snapshots handed to the
//! render sink are immutable.
//!
//! Every mutation carries a [`SessionTag`] captured at dispatch time; a
//! reset rotates the tag, so late results from a superseded session are
//! rejected instead of reappearing in the fresh one.

use std::sync::{Arc, Mutex, MutexGuard};

use colloquy_core::types::{InitialState, Turn};
use tracing::debug;
use uuid::Uuid;

use crate::error::SessionError;

/// Opaque epoch identifying one session generation.
///
/// Captured when a backend call is dispatched and compared when its result
/// arrives; a mismatch means a reset happened in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTag(Uuid);

struct StoreInner {
    /// Externally supplied session identity; `None` after a reset.
    session_id: Option<String>,
    epoch: Uuid,
    turns: Arc<Vec<Turn>>,
}

/// Holds the durable conversation log for one mounted controller.
pub struct SessionStore {
    inner: Mutex<StoreInner>,
}

impl SessionStore {
    /// Create the store from the externally supplied initial state.
    pub fn mount(initial: InitialState) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                session_id: Some(initial.session_id),
                epoch: Uuid::new_v4(),
                turns: Arc::new(initial.messages),
            }),
        }
    }

    /// The tag of the currently live session.
    pub fn tag(&self) -> Result<SessionTag, SessionError> {
        Ok(SessionTag(self.lock()?.epoch))
    }

    /// The externally supplied session identity, if the session has one.
    pub fn session_id(&self) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.session_id.clone())
    }

    /// Immutable snapshot of the turn log.
    pub fn turns(&self) -> Result<Arc<Vec<Turn>>, SessionError> {
        Ok(Arc::clone(&self.lock()?.turns))
    }

    /// Append a turn, provided `tag` still names the live session.
    ///
    /// Builds a new list rather than editing in place, preserving insertion
    /// order; existing snapshots are unaffected.
    pub fn append_turn(&self, turn: Turn, tag: SessionTag) -> Result<(), SessionError> {
        let mut inner = self.lock()?;
        if inner.epoch != tag.0 {
            debug!(turn_id = %turn.id, "discarding append for superseded session");
            return Err(SessionError::Superseded);
        }
        let mut next = Vec::with_capacity(inner.turns.len() + 1);
        next.extend(inner.turns.iter().cloned());
        next.push(turn);
        inner.turns = Arc::new(next);
        Ok(())
    }

    /// Empty the session: no turns, no identity, fresh epoch.
    ///
    /// The only operation that removes existing turns.
    pub fn replace_all(&self) -> Result<(), SessionError> {
        let mut inner = self.lock()?;
        inner.session_id = None;
        inner.epoch = Uuid::new_v4();
        inner.turns = Arc::new(Vec::new());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, SessionError> {
        self.inner
            .lock()
            .map_err(|e| SessionError::State(format!("session store lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
