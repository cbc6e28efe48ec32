use routefinder_domain::{DomainError, Page};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ApiTransport;

/// Walks a chain of list pages and concatenates their resources in server order.
#[derive(Clone)]
pub struct PaginatedFetcher {
    transport: Arc<dyn ApiTransport>,
}

impl PaginatedFetcher {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetches `start_path` and every page after it until `next_url` is empty.
    ///
    /// The first transport or decode failure aborts the walk; resources
    /// gathered from earlier pages are dropped.
    #[instrument(skip(self))]
    pub async fn fetch_all<T>(&self, start_path: &str) -> Result<Vec<T>, DomainError>
    where
        T: DeserializeOwned + Send,
    {
        let mut resources = Vec::new();
        let mut next = Some(start_path.to_string());
        let mut pages = 0u32;

        while let Some(path) = next.take() {
            debug!(path = %path, "Fetching page");
            let body = self.transport.get(&path).await?;

            let page: Page<T> = serde_json::from_str(&body)
                .map_err(|e| DomainError::Decode(format!("{}: {}", path, e)))?;
            pages += 1;

            next = page.next_path().map(str::to_string);
            resources.extend(page.resources);
        }

        debug!(pages, resources = resources.len(), "Pagination complete");
        Ok(resources)
    }
}
