//! Dual-state chat session controller for Colloquy.
//!
//! Keeps a durable, serializable conversation log consistent with a derived,
//! transient render list across asynchronous generation round trips,
//! deep-link auto-submission, and full session reset.

pub mod controller;
pub mod error;
pub mod filter;
pub mod generate;
pub mod prompts;
pub mod render;
pub mod state;
pub mod store;

pub use controller::SessionController;
pub use error::SessionError;
pub use filter::{Category, CategoryPicker};
pub use generate::{GenerateRequest, GeneratedReply, Generator, Router};
pub use prompts::{ExamplePrompt, EXAMPLE_PROMPTS};
pub use render::{RenderEntry, RenderPayload};
pub use state::{GenerationGate, GenerationState};
pub use store::{SessionStore, SessionTag};
