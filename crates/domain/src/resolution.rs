use serde::Serialize;

use crate::route::Route;
use crate::routing_domain::Domain;

/// Terminal outcome of resolving a hostname.
///
/// Fetch failures are reported as `Err(DomainError)` instead of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// The hostname is itself a registered domain.
    ExactDomainMatch { domain: Domain },

    /// The hostname is a subdomain and at least one route carries its label.
    RoutesFound {
        domain: Domain,
        subdomain: String,
        routes: Vec<Route>,
    },

    /// The hostname is under a registered domain but no route carries its label.
    NoRoutesFound { domain: Domain, subdomain: String },

    /// No suffix of the hostname is a registered domain.
    NoDomainFound { hostname: String },
}

impl Resolution {
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::ExactDomainMatch { .. } => "exact_domain_match",
            Resolution::RoutesFound { .. } => "routes_found",
            Resolution::NoRoutesFound { .. } => "no_routes_found",
            Resolution::NoDomainFound { .. } => "no_domain_found",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(
            self,
            Resolution::ExactDomainMatch { .. } | Resolution::RoutesFound { .. }
        )
    }

    pub fn domain(&self) -> Option<&Domain> {
        match self {
            Resolution::ExactDomainMatch { domain }
            | Resolution::RoutesFound { domain, .. }
            | Resolution::NoRoutesFound { domain, .. } => Some(domain),
            Resolution::NoDomainFound { .. } => None,
        }
    }

    pub fn routes(&self) -> &[Route] {
        match self {
            Resolution::RoutesFound { routes, .. } => routes,
            _ => &[],
        }
    }
}
