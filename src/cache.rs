//! Suggestion cache engine
//!
//! Keeps at most one cached suggestion list per file path, together with the
//! editing state (content, cursor, context) that produced it. A lookup only
//! hits while that state is exactly unchanged; any edit, cursor move, or
//! context change misses and leaves the entry in place until the next store
//! for the same path, an explicit invalidation, or a full clear.
//!
//! The engine has no internal locking. Mutating operations take `&mut self`,
//! so concurrent callers must serialize access to the whole cache behind a
//! single exclusive lock (`clear` and `invalidate` mutate shared map
//! structure, so per-entry locking would not be sound anyway).

use std::collections::HashMap;

use crate::position::CursorPosition;

/// One cached suggestion list plus the editing state it was generated from.
#[derive(Debug, Clone)]
struct CacheEntry<S> {
    /// Full document text at generation time
    content: String,
    /// Cursor location at generation time
    cursor: CursorPosition,
    /// Ordered context strings used to generate the suggestions
    context: Vec<String>,
    /// The suggestions themselves; opaque to the cache
    suggestions: Vec<S>,
}

impl<S> CacheEntry<S> {
    /// Check whether this entry is still valid for the given editing state.
    ///
    /// Validity is exact, total equality over all three fields. There is no
    /// fuzzy reuse across small edits.
    fn matches(&self, content: &str, cursor: CursorPosition, context: &[String]) -> bool {
        self.content == content && self.cursor == cursor && self.context == context
    }
}

/// In-memory cache of code-completion suggestions, keyed by file path.
///
/// The suggestion type `S` is opaque: the cache stores and replays lists of
/// it without ever inspecting the records. `S: Clone` is required because
/// lookups hand back owned copies; callers never hold references into the
/// cache.
#[derive(Debug, Default, Clone)]
pub struct SuggestionCache<S> {
    entries: HashMap<String, CacheEntry<S>>,
}

impl<S: Clone> SuggestionCache<S> {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store suggestions for a file, replacing any previous entry for the
    /// same path.
    ///
    /// Captures the full editing state alongside the suggestions so later
    /// lookups can detect staleness. Replacement is wholesale; the previous
    /// entry's suggestions are discarded, never merged.
    pub fn put(
        &mut self,
        suggestions: Vec<S>,
        content: &str,
        cursor: CursorPosition,
        context: &[String],
        file_path: &str,
    ) {
        let count = suggestions.len();
        let entry = CacheEntry {
            content: content.to_string(),
            cursor,
            context: context.to_vec(),
            suggestions,
        };
        let replaced = self.entries.insert(file_path.to_string(), entry);
        log::debug!(
            "cached {} suggestion(s) for {} at {} (replaced: {})",
            count,
            file_path,
            cursor,
            replaced.is_some()
        );
    }

    /// Look up suggestions for the current editing state.
    ///
    /// Returns a copy of the stored suggestions only if an entry exists for
    /// `file_path` and its content, cursor, and context all exactly equal the
    /// arguments. A mismatch returns `None` without deleting the entry, so a
    /// caller that returns to the exact prior state (e.g. via undo) can still
    /// hit.
    pub fn get(
        &self,
        content: &str,
        cursor: CursorPosition,
        context: &[String],
        file_path: &str,
    ) -> Option<Vec<S>> {
        let Some(entry) = self.entries.get(file_path) else {
            log::debug!("cache miss for {}: no entry", file_path);
            return None;
        };

        if !entry.matches(content, cursor, context) {
            log::debug!(
                "cache miss for {}: stale (content changed: {}, cursor moved: {}, context changed: {})",
                file_path,
                entry.content != content,
                entry.cursor != cursor,
                entry.context != context
            );
            return None;
        }

        log::debug!(
            "cache hit for {} at {}: {} suggestion(s)",
            file_path,
            cursor,
            entry.suggestions.len()
        );
        Some(entry.suggestions.clone())
    }

    /// Drop the entry for a file, if any. No-op for unknown paths.
    pub fn invalidate(&mut self, file_path: &str) {
        if self.entries.remove(file_path).is_some() {
            log::debug!("invalidated cache entry for {}", file_path);
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        log::debug!("cleared {} cache entr(ies)", count);
    }

    /// Number of files with a cached entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a file has a cached entry, valid or not.
    ///
    /// Occupancy only; use [`get`](Self::get) to test validity.
    pub fn contains_path(&self, file_path: &str) -> bool {
        self.entries.contains_key(file_path)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
