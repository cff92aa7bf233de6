//! Open-modal registry
//!
//! The registry is the single source of truth for "is any modal open":
//! the native popup memory of the render library is never consulted. A
//! modal renders only while its id is registered, and a dismissal removes
//! the id in the same frame, so the registry cannot drift from what is on
//! screen.

use std::collections::HashSet;

use tracing::debug;

/// Tracks which modal ids are open across frames
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    open: HashSet<String>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a modal as open. Idempotent.
    pub fn open(&mut self, id: &str) {
        if self.open.insert(id.to_string()) {
            debug!(modal = id, "modal opened");
        }
    }

    /// Mark a modal as closed. Idempotent.
    pub fn close(&mut self, id: &str) {
        if self.open.remove(id) {
            debug!(modal = id, "modal closed");
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
