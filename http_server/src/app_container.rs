use std::sync::Arc;

use cnn_text_parser::OutageTable;
use web_page_extractor::PageFetcher;

use crate::snapshot::SnapshotStore;

/// The serving layer's state: the page fetcher and the current snapshot.
/// Injected into handlers via `web::Data` rather than read from ambient
/// globals.
pub struct Application {
    fetcher: Arc<dyn PageFetcher>,
    store: SnapshotStore,
}

impl Application {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            store: SnapshotStore::default(),
        }
    }

    /// The current snapshot, extracting one from the live page on first use.
    pub async fn snapshot(&self) -> Arc<OutageTable> {
        if let Some(table) = self.store.current() {
            return table;
        }
        self.refresh().await
    }

    /// Discards the prior snapshot and re-runs the whole pipeline on a
    /// fresh fetch. A fetch failure degrades to an empty table; the core
    /// never sees an error.
    pub async fn refresh(&self) -> Arc<OutageTable> {
        let lines = match self.fetcher.fetch_lines().await {
            Ok(lines) => lines,
            Err(err) => {
                tracing::warn!("failed to fetch the CNN page: {err:#}");
                Vec::new()
            }
        };
        let table = Arc::new(cnn_text_parser::extract_records(lines));
        self.store.replace(Arc::clone(&table));
        table
    }
}
