use routefinder_domain::{candidate_domains, DomainCatalog, ListQuery};
use serde_json::{json, Value};

pub const ROUTES_PATH: &str = "/v2/routes?results-per-page=100";

pub fn domain_query_path(catalog: DomainCatalog, hostname: &str) -> String {
    ListQuery::new(catalog.endpoint())
        .filter_in("name", &candidate_domains(hostname))
        .to_path()
}

/// Cloud Controller v2 page of domains given as `(guid, name)` pairs.
pub fn domain_page(next_url: Option<&str>, domains: &[(&str, &str)]) -> String {
    let resources: Vec<Value> = domains
        .iter()
        .map(|(guid, name)| {
            json!({
                "metadata": { "guid": guid, "url": format!("/v2/domains/{}", guid) },
                "entity": { "name": name }
            })
        })
        .collect();

    envelope(next_url, resources)
}

/// Cloud Controller v2 page of routes given as `(guid, host, domain_guid)` triples.
pub fn route_page(next_url: Option<&str>, routes: &[(&str, Option<&str>, &str)]) -> String {
    let resources: Vec<Value> = routes
        .iter()
        .map(|(guid, host, domain_guid)| {
            json!({
                "metadata": { "guid": guid },
                "entity": { "host": host.unwrap_or(""), "domain_guid": domain_guid, "path": "" }
            })
        })
        .collect();

    envelope(next_url, resources)
}

fn envelope(next_url: Option<&str>, resources: Vec<Value>) -> String {
    json!({
        "total_results": resources.len(),
        "next_url": next_url,
        "resources": resources
    })
    .to_string()
}
