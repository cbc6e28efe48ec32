use routefinder_domain::{DomainError, ListQuery, Route, ROUTES_ENDPOINT};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ApiTransport;
use crate::services::PaginatedFetcher;

/// Lists every route visible to the caller, unfiltered.
pub struct GetRoutesUseCase {
    fetcher: PaginatedFetcher,
}

impl GetRoutesUseCase {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            fetcher: PaginatedFetcher::new(transport),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Route>, DomainError> {
        let path = ListQuery::new(ROUTES_ENDPOINT).to_path();
        let routes: Vec<Route> = self.fetcher.fetch_all(&path).await?;

        info!(count = routes.len(), "Routes fetched");
        Ok(routes)
    }
}
