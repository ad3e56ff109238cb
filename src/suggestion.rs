//! Completion suggestion record
//!
//! The opaque payload the toolchain stores in the cache. Suggestions are
//! produced by an external generation component (typically parsed out of a
//! provider response); the cache never inspects them, it only stores and
//! replays whole lists.

use serde::{Deserialize, Serialize};

/// A single code-completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSuggestion {
    /// The text to insert at the cursor
    pub text: String,
    /// Brief explanation of what the suggestion does, when the provider
    /// supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CompletionSuggestion {
    /// Create a suggestion with no description
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
        }
    }

    /// Create a suggestion with a description
    pub fn with_description(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: Some(description.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_description() {
        let suggestion = CompletionSuggestion::new("user.name");
        assert_eq!(suggestion.text, "user.name");
        assert!(suggestion.description.is_none());
    }

    #[test]
    fn test_with_description() {
        let suggestion =
            CompletionSuggestion::with_description("users.filter(active)", "Keep active users");
        assert_eq!(suggestion.text, "users.filter(active)");
        assert_eq!(suggestion.description.as_deref(), Some("Keep active users"));
    }

    #[test]
    fn test_deserialize_without_description() {
        // Providers frequently omit the description field entirely
        let suggestion: CompletionSuggestion =
            serde_json::from_str(r#"{"text": "foo()"}"#).unwrap();
        assert_eq!(suggestion, CompletionSuggestion::new("foo()"));
    }

    #[test]
    fn test_serialize_skips_absent_description() {
        let json = serde_json::to_string(&CompletionSuggestion::new("foo()")).unwrap();
        assert!(!json.contains("description"));
    }
}
