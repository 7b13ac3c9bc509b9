//! Generation collaborator contract.
//!
//! The backend is opaque to the controller: one async call per submission,
//! returning a single reply. The backend may additionally stream further
//! durable turns through [`crate::controller::SessionController::ingest_turn`].

use async_trait::async_trait;
use colloquy_core::types::TurnKind;
use uuid::Uuid;

use crate::error::SessionError;
use crate::filter::Category;

/// Outbound payload for one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input: String,
    pub category: Category,
}

impl GenerateRequest {
    /// The payload as form-encoded key/value pairs.
    ///
    /// The `category` key is always present; the wildcard is sent as the
    /// explicit value `"All"`, never omitted.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("input".to_string(), self.input.clone()),
            ("category".to_string(), self.category.as_str().to_string()),
        ]
    }
}

/// The backend's answer to one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedReply {
    /// Identity for the resulting turn and render entry.
    pub id: Uuid,
    pub content: String,
    pub kind: TurnKind,
}

/// Asynchronous generation backend.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Run one generation round trip for the given payload.
    async fn submit(&self, request: GenerateRequest) -> Result<GeneratedReply, SessionError>;
}

/// Navigation collaborator; consumes a single "go home" call from reset.
pub trait Router: Send + Sync {
    fn navigate_home(&self);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_contain_input_and_category() {
        let request = GenerateRequest {
            input: "what is rust".to_string(),
            category: Category::NewsArticle,
        };
        let fields = request.form_fields();
        assert!(fields.contains(&("input".to_string(), "what is rust".to_string())));
        assert!(fields.contains(&("category".to_string(), "News Article".to_string())));
    }

    #[test]
    fn test_wildcard_category_is_explicit() {
        let request = GenerateRequest {
            input: "q".to_string(),
            category: Category::All,
        };
        let fields = request.form_fields();
        assert!(fields.contains(&("category".to_string(), "All".to_string())));
    }

    #[test]
    fn test_category_key_never_omitted() {
        for category in Category::ALL {
            let request = GenerateRequest {
                input: "q".to_string(),
                category,
            };
            assert!(request
                .form_fields()
                .iter()
                .any(|(key, _)| key == "category"));
        }
    }
}
