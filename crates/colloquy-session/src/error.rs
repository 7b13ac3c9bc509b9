//! Error types for the session controller.

use colloquy_core::error::ColloquyError;

/// Errors from the chat session controller.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("chat is disabled")]
    Disabled,
    #[error("input cannot be empty")]
    EmptyInput,
    #[error("input exceeds maximum length of {0} characters")]
    InputTooLong(usize),
    #[error("a generation is already in flight")]
    Busy,
    #[error("generation failed: {0}")]
    Generation(String),
    #[error("result belongs to a superseded session")]
    Superseded,
    #[error("session state error: {0}")]
    State(String),
}

impl From<ColloquyError> for SessionError {
    fn from(err: ColloquyError) -> Self {
        match err {
            ColloquyError::Generation(msg) => SessionError::Generation(msg),
            other => SessionError::State(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        assert_eq!(SessionError::Disabled.to_string(), "chat is disabled");
        assert_eq!(SessionError::EmptyInput.to_string(), "input cannot be empty");
        assert_eq!(
            SessionError::InputTooLong(2000).to_string(),
            "input exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            SessionError::Busy.to_string(),
            "a generation is already in flight"
        );
        assert_eq!(
            SessionError::Generation("timeout".to_string()).to_string(),
            "generation failed: timeout"
        );
        assert_eq!(
            SessionError::Superseded.to_string(),
            "result belongs to a superseded session"
        );
        assert_eq!(
            SessionError::State("lock poisoned".to_string()).to_string(),
            "session state error: lock poisoned"
        );
    }

    #[test]
    fn test_from_core_generation_error() {
        let err: SessionError = ColloquyError::Generation("backend down".to_string()).into();
        assert!(matches!(err, SessionError::Generation(_)));
        assert!(err.to_string().contains("backend down"));
    }

    #[test]
    fn test_from_core_other_error() {
        let err: SessionError = ColloquyError::Config("bad toml".to_string()).into();
        assert!(matches!(err, SessionError::State(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", SessionError::Busy);
        assert!(dbg.contains("Busy"));
    }
}
