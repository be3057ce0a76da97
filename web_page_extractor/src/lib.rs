//! The page-fetching collaborator: retrieves the Ikeja Electric CNN status
//! page and reduces its HTML to the flat line sequence the core pipeline
//! consumes. The `PageFetcher` seam lets the serving layer and tests swap
//! in fakes.

mod text_reducer;

use async_trait::async_trait;
use shared_kernel::http_client::HttpClient;
use url::Url;

pub use text_reducer::reduce_to_lines;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the page as ordered, trimmed, non-empty text lines.
    async fn fetch_lines(&self) -> anyhow::Result<Vec<String>>;
}

pub struct CnnPageFetcher {
    page_url: Url,
}

impl CnnPageFetcher {
    pub fn new(page_url: Url) -> Self {
        Self { page_url }
    }
}

#[async_trait]
impl PageFetcher for CnnPageFetcher {
    async fn fetch_lines(&self) -> anyhow::Result<Vec<String>> {
        let html = HttpClient::get_text(self.page_url.clone()).await?;
        Ok(text_reducer::reduce_to_lines(&html))
    }
}
