//! Session controller: the single writer of conversation state.
//!
//! Orchestrates one generation round trip per submission: validates input,
//! appends the user's turn synchronously so it renders before the backend
//! call, dispatches the payload (category always included), and applies the
//! result only if the session it was dispatched for is still live.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use colloquy_core::config::ChatConfig;
use colloquy_core::types::{InitialState, Turn, TurnRole};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::filter::{Category, CategoryPicker};
use crate::generate::{GenerateRequest, Generator, Router};
use crate::prompts::EXAMPLE_PROMPTS;
use crate::render::{self, RenderEntry};
use crate::state::{GenerationGate, GenerationState};
use crate::store::{SessionStore, SessionTag};

/// Controller for one mounted chat session.
///
/// Owns all session state exclusively; collaborators only supply the initial
/// state and generation results.
pub struct SessionController {
    config: ChatConfig,
    store: SessionStore,
    gate: GenerationGate,
    picker: Mutex<CategoryPicker>,
    draft: Mutex<String>,
    auto_submitted: AtomicBool,
    generator: Arc<dyn Generator>,
    router: Arc<dyn Router>,
}

impl SessionController {
    /// Mount a controller with externally supplied initial state.
    pub fn mount(
        config: ChatConfig,
        initial: InitialState,
        generator: Arc<dyn Generator>,
        router: Arc<dyn Router>,
    ) -> Self {
        info!(session_id = %initial.session_id, restored = initial.messages.len(), "session mounted");
        Self {
            config,
            store: SessionStore::mount(initial),
            gate: GenerationGate::new(),
            picker: Mutex::new(CategoryPicker::new()),
            draft: Mutex::new(String::new()),
            auto_submitted: AtomicBool::new(false),
            generator,
            router,
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Run one generation round trip for `input`.
    ///
    /// The user's turn is appended before the backend call, so the render
    /// list shows it immediately. The round trip stays "generating" after
    /// the call resolves until a terminal-kind turn lands in the log.
    pub async fn submit(&self, input: &str) -> Result<RenderEntry, SessionError> {
        if !self.config.enabled {
            return Err(SessionError::Disabled);
        }
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if input.len() > self.config.max_input_length {
            return Err(SessionError::InputTooLong(self.config.max_input_length));
        }

        // Single-flight: the submit affordance is disabled while generating.
        self.gate.begin()?;

        let tag = self.store.tag()?;
        self.store.append_turn(Turn::user(input), tag)?;

        let request = GenerateRequest {
            input: input.to_string(),
            category: self.category()?,
        };
        debug!(category = %request.category, "dispatching generation request");

        let reply = match self.generator.submit(request).await {
            Ok(reply) => reply,
            Err(e) => {
                // A failed call must not wedge the session: return the gate
                // to Idle unless a reset already superseded this round trip.
                if self.store.tag()? == tag {
                    warn!(error = %e, "generation call failed");
                    self.gate.reset()?;
                }
                return Err(e);
            }
        };

        if self.store.tag()? != tag {
            debug!(reply_id = %reply.id, "discarding result for superseded session");
            return Err(SessionError::Superseded);
        }

        let turn = Turn {
            id: reply.id,
            role: TurnRole::Assistant,
            content: reply.content,
            kind: reply.kind,
            created_at: chrono::Utc::now(),
        };
        let entry = render::entry_for(&turn);
        self.store.append_turn(turn, tag)?;
        self.gate.resolved()?;
        self.gate.observe(reply.kind)?;
        Ok(entry)
    }

    /// Deep-link auto-submit: fires at most one submission per mount.
    ///
    /// The latch is consumed on the first call whether or not it fires, so
    /// re-renders and later query changes never trigger a second submission.
    /// Returns whether a submission was made.
    pub async fn auto_submit(&self, query: Option<&str>) -> Result<bool, SessionError> {
        if self.auto_submitted.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        let Some(query) = query else {
            return Ok(false);
        };
        let query = query.trim();
        if query.is_empty() {
            return Ok(false);
        }
        debug!("auto-submitting deep-link query");
        self.submit(query).await?;
        Ok(true)
    }

    /// Streaming side channel: the backend appends a durable turn after the
    /// initial call resolved. Tag-guarded; a terminal kind ends the round
    /// trip.
    pub fn ingest_turn(&self, turn: Turn, tag: SessionTag) -> Result<(), SessionError> {
        let kind = turn.kind;
        self.store.append_turn(turn, tag)?;
        self.gate.observe(kind)
    }

    // -------------------------------------------------------------------------
    // Reset
    // -------------------------------------------------------------------------

    /// Clear the session: empty log, no identity, idle gate, empty draft,
    /// navigate home. Irreversible; the category filter is untouched.
    pub fn reset(&self) -> Result<(), SessionError> {
        self.gate.reset()?;
        self.store.replace_all()?;
        self.lock_draft()?.clear();
        self.router.navigate_home();
        info!("session reset");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    /// Immutable snapshot of the durable turn log.
    pub fn turns(&self) -> Result<Arc<Vec<Turn>>, SessionError> {
        self.store.turns()
    }

    /// The ordered render list, derived from the turn log.
    pub fn render_entries(&self) -> Result<Vec<RenderEntry>, SessionError> {
        Ok(render::derive(&self.store.turns()?))
    }

    pub fn session_id(&self) -> Result<Option<String>, SessionError> {
        self.store.session_id()
    }

    /// The tag in-flight work should carry; see [`Self::ingest_turn`].
    pub fn tag(&self) -> Result<SessionTag, SessionError> {
        self.store.tag()
    }

    pub fn generation_state(&self) -> GenerationState {
        self.gate.current()
    }

    pub fn is_generating(&self) -> bool {
        self.gate.is_generating()
    }

    // -------------------------------------------------------------------------
    // Category filter
    // -------------------------------------------------------------------------

    pub fn category(&self) -> Result<Category, SessionError> {
        Ok(self.lock_picker()?.selected())
    }

    /// Select a category; the picker closes.
    pub fn select_category(&self, category: Category) -> Result<(), SessionError> {
        self.lock_picker()?.select(category);
        Ok(())
    }

    pub fn picker_open(&self) -> Result<bool, SessionError> {
        Ok(self.lock_picker()?.is_open())
    }

    pub fn set_picker_open(&self, open: bool) -> Result<(), SessionError> {
        self.lock_picker()?.set_open(open);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Draft input
    // -------------------------------------------------------------------------

    pub fn draft(&self) -> Result<String, SessionError> {
        Ok(self.lock_draft()?.clone())
    }

    pub fn set_draft(&self, text: impl Into<String>) -> Result<(), SessionError> {
        *self.lock_draft()? = text.into();
        Ok(())
    }

    /// Copy an example prompt into the draft input. Returns false for an
    /// out-of-range index.
    pub fn use_example_prompt(&self, index: usize) -> Result<bool, SessionError> {
        let Some(prompt) = EXAMPLE_PROMPTS.get(index) else {
            return Ok(false);
        };
        self.set_draft(prompt.message)?;
        Ok(true)
    }

    fn lock_picker(&self) -> Result<MutexGuard<'_, CategoryPicker>, SessionError> {
        self.picker
            .lock()
            .map_err(|e| SessionError::State(format!("picker lock poisoned: {}", e)))
    }

    fn lock_draft(&self) -> Result<MutexGuard<'_, String>, SessionError> {
        self.draft
            .lock()
            .map_err(|e| SessionError::State(format!("draft lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
