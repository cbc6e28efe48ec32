use routefinder_domain::{candidate_domains, Domain, DomainCatalog, DomainError, ListQuery};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::ApiTransport;
use crate::services::PaginatedFetcher;

pub struct ResolveDomainUseCase {
    fetcher: PaginatedFetcher,
}

impl ResolveDomainUseCase {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            fetcher: PaginatedFetcher::new(transport),
        }
    }

    /// Finds the most specific registered domain that `hostname` ends with.
    ///
    /// Returns `Ok(None)` when no suffix of the hostname is registered.
    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<Option<Domain>, DomainError> {
        let candidates = candidate_domains(hostname);
        if candidates.is_empty() {
            debug!("Hostname has a single label, no candidate domains");
            return Ok(None);
        }
        debug!(candidates = ?candidates, "Candidate domains");

        let pool = self.fetch_candidate_pool(&candidates).await?;
        info!(matching = pool.len(), "Matching domains fetched");

        let matched = select_most_specific(&candidates, &pool);
        if let Some(domain) = &matched {
            info!(
                guid = %domain.guid,
                name = %domain.name,
                catalog = domain.catalog.map(|c| c.to_str()).unwrap_or("unknown"),
                "Domain matched"
            );
        }
        Ok(matched)
    }

    /// Private catalog matches first, then shared, each in server order.
    async fn fetch_candidate_pool(&self, candidates: &[String]) -> Result<Vec<Domain>, DomainError> {
        let mut pool = Vec::new();

        for catalog in DomainCatalog::ALL {
            let path = ListQuery::new(catalog.endpoint())
                .filter_in("name", candidates)
                .to_path();

            let domains: Vec<Domain> = self.fetcher.fetch_all(&path).await?;
            debug!(catalog = catalog.to_str(), count = domains.len(), "Catalog queried");
            pool.extend(domains.into_iter().map(|d| d.with_catalog(catalog)));
        }

        Ok(pool)
    }
}

/// Picks the pool entry matching the earliest candidate.
///
/// Candidates run most specific first, so a registered `bar.example.com`
/// beats `example.com` wherever each sits in the pool.
pub fn select_most_specific(candidates: &[String], pool: &[Domain]) -> Option<Domain> {
    candidates
        .iter()
        .find_map(|candidate| pool.iter().find(|d| d.name.as_ref() == candidate.as_str()))
        .cloned()
}
