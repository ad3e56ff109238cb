//! suggestion-cache library - In-memory cache for code-completion suggestions
//!
//! Stores lists of externally generated suggestions keyed by file path and
//! replays them only while the editing state (content, cursor, context) that
//! produced them is exactly unchanged.

pub mod cache;
pub mod position;
pub mod suggestion;

// Re-export commonly used types for convenience
pub use cache::SuggestionCache;
pub use position::CursorPosition;
pub use suggestion::CompletionSuggestion;
