use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const ROUTES_ENDPOINT: &str = "/v2/routes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RouteRepr")]
pub struct Route {
    pub guid: Arc<str>,
    /// Subdomain label. `None` for apex routes, which are common on private domains.
    pub host: Option<Arc<str>>,
    pub domain_guid: Option<Arc<str>>,
    pub path: Option<Arc<str>>,
    pub port: Option<u16>,
}

impl Route {
    pub fn new(guid: impl Into<Arc<str>>, host: Option<&str>) -> Self {
        Self {
            guid: guid.into(),
            host: normalize_host(host.map(Arc::from)),
            domain_guid: None,
            path: None,
            port: None,
        }
    }

    pub fn with_domain_guid(mut self, domain_guid: impl Into<Arc<str>>) -> Self {
        self.domain_guid = Some(domain_guid.into());
        self
    }

    /// Exact, case-sensitive host comparison. Routes without a host never match.
    pub fn matches_host(&self, subdomain: &str) -> bool {
        self.host.as_deref() == Some(subdomain)
    }
}

fn normalize_host(host: Option<Arc<str>>) -> Option<Arc<str>> {
    host.filter(|h| !h.is_empty())
}

fn normalize_path(path: Option<Arc<str>>) -> Option<Arc<str>> {
    path.filter(|p| !p.is_empty())
}

#[derive(Deserialize)]
struct ResourceMetadata {
    guid: Arc<str>,
}

#[derive(Deserialize)]
struct RouteEntity {
    #[serde(default)]
    host: Option<Arc<str>>,
    #[serde(default)]
    domain_guid: Option<Arc<str>>,
    #[serde(default)]
    path: Option<Arc<str>>,
    #[serde(default)]
    port: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RouteRepr {
    Nested {
        metadata: ResourceMetadata,
        entity: RouteEntity,
    },
    // guid is required so a malformed nested record cannot fall through here.
    Flat {
        guid: Arc<str>,
        #[serde(flatten)]
        entity: RouteEntity,
    },
}

impl From<RouteRepr> for Route {
    fn from(repr: RouteRepr) -> Self {
        let (guid, entity) = match repr {
            RouteRepr::Nested { metadata, entity } => (metadata.guid, entity),
            RouteRepr::Flat { guid, entity } => (guid, entity),
        };

        Route {
            guid,
            host: normalize_host(entity.host),
            domain_guid: entity.domain_guid,
            path: normalize_path(entity.path),
            port: entity.port,
        }
    }
}
