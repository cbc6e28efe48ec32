use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which domain catalog a record was listed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainCatalog {
    /// Domains owned by a tenant organization.
    Private,
    /// Domains shared by the whole platform.
    Shared,
}

impl DomainCatalog {
    /// Catalogs in the order they are queried.
    pub const ALL: [DomainCatalog; 2] = [DomainCatalog::Private, DomainCatalog::Shared];

    pub fn endpoint(&self) -> &'static str {
        match self {
            DomainCatalog::Private => "/v2/private_domains",
            DomainCatalog::Shared => "/v2/shared_domains",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            DomainCatalog::Private => "private",
            DomainCatalog::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DomainRepr")]
pub struct Domain {
    pub guid: Arc<str>,
    pub name: Arc<str>,
    pub catalog: Option<DomainCatalog>,
}

impl Domain {
    pub fn new(guid: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: DomainCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

#[derive(Deserialize)]
struct ResourceMetadata {
    guid: Arc<str>,
}

#[derive(Deserialize)]
struct DomainEntity {
    name: Arc<str>,
}

// Cloud Controller nests fields under metadata/entity; flat records are also accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum DomainRepr {
    Nested {
        metadata: ResourceMetadata,
        entity: DomainEntity,
    },
    Flat {
        guid: Arc<str>,
        name: Arc<str>,
        #[serde(default)]
        catalog: Option<DomainCatalog>,
    },
}

impl From<DomainRepr> for Domain {
    fn from(repr: DomainRepr) -> Self {
        match repr {
            DomainRepr::Nested { metadata, entity } => Domain::new(metadata.guid, entity.name),
            DomainRepr::Flat {
                guid,
                name,
                catalog,
            } => Domain {
                guid,
                name,
                catalog,
            },
        }
    }
}
