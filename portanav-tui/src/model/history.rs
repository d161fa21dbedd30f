//! In-process session history
//!
//! Linear entry list with a cursor, modelled after a browser session:
//! pushing while the cursor sits mid-list discards the forward branch.
//! The startup entry is seeded so that stepping back from the first
//! pushed entry still restores the landing section.

use std::sync::{Mutex, MutexGuard};

use portanav_core::{HistoryEntry, HistoryStore};
use serde_json::Value;

struct HistoryState {
    entries: Vec<(Value, String)>,
    cursor: usize,
    initial_fragment: Option<String>,
}

pub struct SessionHistory {
    inner: Mutex<HistoryState>,
}

impl SessionHistory {
    /// `initial_section` seeds entry zero; `initial_fragment` is the
    /// fragment the process was started with (e.g. `#educacion`), if any.
    pub fn new(initial_section: &str, initial_fragment: Option<String>) -> Self {
        let seed = HistoryEntry {
            section: initial_section.to_string(),
        };
        let payload = serde_json::to_value(&seed).unwrap_or(Value::Null);
        Self {
            inner: Mutex::new(HistoryState {
                entries: vec![(payload, format!("#{initial_section}"))],
                cursor: 0,
                initial_fragment,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Step back one entry, returning the payload to replay.
    pub fn back(&self) -> Option<Value> {
        let mut state = self.lock();
        if state.cursor == 0 {
            return None;
        }
        state.cursor -= 1;
        state.entries.get(state.cursor).map(|(p, _)| p.clone())
    }

    /// Step forward one entry, returning the payload to replay.
    pub fn forward(&self) -> Option<Value> {
        let mut state = self.lock();
        if state.cursor + 1 >= state.entries.len() {
            return None;
        }
        state.cursor += 1;
        state.entries.get(state.cursor).map(|(p, _)| p.clone())
    }

    /// Fragment of the entry the cursor currently points at.
    pub fn current_fragment(&self) -> Option<String> {
        let state = self.lock();
        state.entries.get(state.cursor).map(|(_, f)| f.clone())
    }
}

impl HistoryStore for SessionHistory {
    fn push(&self, entry: &HistoryEntry, fragment: &str) {
        let mut state = self.lock();
        let cursor = state.cursor;
        state.entries.truncate(cursor + 1);
        let payload = serde_json::to_value(entry).unwrap_or(Value::Null);
        state.entries.push((payload, fragment.to_string()));
        state.cursor = state.entries.len() - 1;
    }

    fn initial_fragment(&self) -> Option<String> {
        self.lock().initial_fragment.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section: &str) -> HistoryEntry {
        HistoryEntry {
            section: section.to_string(),
        }
    }

    #[test]
    fn back_from_the_first_push_restores_the_seed_entry() {
        let history = SessionHistory::new("inicio", None);
        history.push(&entry("contacto"), "#contacto");

        let payload = history.back().expect("seed entry exists");
        assert_eq!(payload["section"], "inicio");
        assert!(history.back().is_none());

        let payload = history.forward().expect("forward branch intact");
        assert_eq!(payload["section"], "contacto");
        assert!(history.forward().is_none());
    }

    #[test]
    fn pushing_mid_list_discards_the_forward_branch() {
        let history = SessionHistory::new("inicio", None);
        history.push(&entry("servicios"), "#servicios");
        history.push(&entry("contacto"), "#contacto");
        history.back();

        history.push(&entry("educacion"), "#educacion");
        // The discarded "contacto" branch is gone.
        assert_eq!(history.current_fragment().as_deref(), Some("#educacion"));
        assert!(history.forward().is_none());

        let payload = history.back().expect("previous entry exists");
        assert_eq!(payload["section"], "servicios");
    }

    #[test]
    fn startup_fragment_is_handed_to_the_store_consumer() {
        let history = SessionHistory::new("inicio", Some("#experiencia".into()));
        assert_eq!(history.initial_fragment().as_deref(), Some("#experiencia"));
        let history = SessionHistory::new("inicio", None);
        assert_eq!(history.initial_fragment(), None);
    }
}
