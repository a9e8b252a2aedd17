//! Cross-navigation scroll resume via a single session-scoped flag.
//!
//! When a pick targets a section on another route, the controller stashes
//! the section id before routing; the destination page takes the flag
//! (read **and clear**) on mount and scrolls to it. One key, read-once
//! semantics, nothing else is persisted.

use std::collections::HashMap;

/// The one session key this crate writes.
pub const PENDING_SECTION_KEY: &str = "sitenav.pending-section";

/// Host seam over session-scoped string storage (sessionStorage in a
/// browser host).
pub trait SessionStore {
    /// Read a key, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a key.
    fn set(&mut self, key: &str, value: &str);
    /// Delete a key; absent keys are fine.
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`] for tests and storage-less hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Record a pending section to scroll to after the next navigation.
pub fn stash_pending_section(store: &mut impl SessionStore, section_id: &str) {
    store.set(PENDING_SECTION_KEY, section_id);
}

/// Take the pending section, clearing it so it resumes at most once.
pub fn take_pending_section(store: &mut impl SessionStore) -> Option<String> {
    let pending = store.get(PENDING_SECTION_KEY)?;
    store.remove(PENDING_SECTION_KEY);
    Some(pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_returns_and_clears() {
        let mut store = MemorySessionStore::new();
        stash_pending_section(&mut store, "operator-portal");
        assert_eq!(
            take_pending_section(&mut store),
            Some("operator-portal".to_string())
        );
        assert_eq!(take_pending_section(&mut store), None);
    }

    #[test]
    fn take_on_empty_store_is_none() {
        let mut store = MemorySessionStore::new();
        assert_eq!(take_pending_section(&mut store), None);
    }

    #[test]
    fn stash_overwrites_previous_flag() {
        let mut store = MemorySessionStore::new();
        stash_pending_section(&mut store, "a");
        stash_pending_section(&mut store, "b");
        assert_eq!(take_pending_section(&mut store), Some("b".to_string()));
    }
}
