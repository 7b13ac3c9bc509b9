use thiserror::Error;

/// Top-level error type for the Colloquy system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ColloquyError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColloquyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ColloquyError {
    fn from(err: toml::de::Error) -> Self {
        ColloquyError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ColloquyError {
    fn from(err: toml::ser::Error) -> Self {
        ColloquyError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ColloquyError {
    fn from(err: serde_json::Error) -> Self {
        ColloquyError::Serialization(err.to_string())
    }
}

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ColloquyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config() {
        let err = ColloquyError::Config("missing section".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing section");
    }

    #[test]
    fn test_display_session() {
        let err = ColloquyError::Session("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Session error: lock poisoned");
    }

    #[test]
    fn test_display_generation() {
        let err = ColloquyError::Generation("backend unavailable".to_string());
        assert_eq!(err.to_string(), "Generation error: backend unavailable");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ColloquyError = io.into();
        assert!(matches!(err, ColloquyError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_from_toml_de_error() {
        let bad: std::result::Result<toml::Value, _> = toml::from_str("not [ valid");
        let err: ColloquyError = bad.unwrap_err().into();
        assert!(matches!(err, ColloquyError::Config(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{broken");
        let err: ColloquyError = bad.unwrap_err().into();
        assert!(matches!(err, ColloquyError::Serialization(_)));
    }

    #[test]
    fn test_errors_implement_debug() {
        let err = ColloquyError::Session("x".to_string());
        assert!(format!("{:?}", err).contains("Session"));
    }
}
