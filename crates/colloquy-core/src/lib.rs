//! Shared foundation for the Colloquy conversational search controller.
//!
//! Holds the durable conversation data model, the top-level error type,
//! TOML configuration, and the tracing bootstrap used by composition roots.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::ColloquyConfig;
pub use error::{ColloquyError, Result};
pub use types::{InitialState, Turn, TurnKind, TurnRole};
