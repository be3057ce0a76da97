use std::sync::{Arc, RwLock};

use cnn_text_parser::OutageTable;

/// Holds at most one extraction snapshot and swaps it atomically, so
/// readers always see either the previous complete table or the new one.
#[derive(Default)]
pub struct SnapshotStore {
    inner: RwLock<Option<Arc<OutageTable>>>,
}

impl SnapshotStore {
    pub fn current(&self) -> Option<Arc<OutageTable>> {
        // A poisoned lock is treated as an empty store; the next query
        // re-extracts rather than failing.
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn replace(&self, table: Arc<OutageTable>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(table);
        }
    }
}
