//! Routefinder Domain Layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod list_query;
pub mod page;
pub mod resolution;
pub mod route;
pub mod routing_domain;

pub use config::{ApiConfig, CliOverrides, Config, ConfigError, LoggingConfig};
pub use errors::DomainError;
pub use hostname::{candidate_domains, leading_label};
pub use list_query::{ListQuery, DEFAULT_RESULTS_PER_PAGE};
pub use page::Page;
pub use resolution::Resolution;
pub use route::{Route, ROUTES_ENDPOINT};
pub use routing_domain::{Domain, DomainCatalog};
