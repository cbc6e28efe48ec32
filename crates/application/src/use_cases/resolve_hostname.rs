use routefinder_domain::{leading_label, DomainError, Resolution, Route};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use super::{GetRoutesUseCase, ResolveDomainUseCase};

/// Resolves a hostname to either a registered domain or the routes under it.
///
/// Domain lookup always runs first. Routes are only fetched when the
/// hostname sits strictly below the matched domain.
pub struct ResolveHostnameUseCase {
    resolve_domain: Arc<ResolveDomainUseCase>,
    get_routes: Arc<GetRoutesUseCase>,
}

impl ResolveHostnameUseCase {
    pub fn new(resolve_domain: Arc<ResolveDomainUseCase>, get_routes: Arc<GetRoutesUseCase>) -> Self {
        Self {
            resolve_domain,
            get_routes,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<Resolution, DomainError> {
        let domain = match self.resolve_domain.execute(hostname).await {
            Ok(Some(domain)) => domain,
            Ok(None) => {
                info!("Could not find matching domain");
                return Ok(Resolution::NoDomainFound {
                    hostname: hostname.to_string(),
                });
            }
            Err(e) => {
                error!(error = %e, "Error retrieving the domains");
                return Err(e);
            }
        };

        if domain.name.as_ref() == hostname {
            info!(guid = %domain.guid, "Hostname is a domain");
            return Ok(Resolution::ExactDomainMatch { domain });
        }

        let subdomain = leading_label(hostname).to_string();
        debug!(subdomain = %subdomain, domain = %domain.name, "Looking up routes");

        let routes = self.get_routes.execute().await.map_err(|e| {
            error!(error = %e, "Error retrieving the routes");
            e
        })?;

        let matches = filter_by_host(routes, &subdomain);
        if matches.is_empty() {
            info!(subdomain = %subdomain, "No route matches subdomain");
            return Ok(Resolution::NoRoutesFound { domain, subdomain });
        }

        info!(subdomain = %subdomain, matches = matches.len(), "Subdomain match");
        Ok(Resolution::RoutesFound {
            domain,
            subdomain,
            routes: matches,
        })
    }
}

fn filter_by_host(routes: Vec<Route>, subdomain: &str) -> Vec<Route> {
    routes
        .into_iter()
        .filter(|route| route.matches_host(subdomain))
        .collect()
}
