use url::form_urlencoded;

pub const DEFAULT_RESULTS_PER_PAGE: u32 = 100;

/// Builds the request path of a filtered, paginated list endpoint.
///
/// Parameters are form-encoded in a fixed order: `q` first, then
/// `results-per-page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    endpoint: String,
    filter: Option<String>,
    results_per_page: u32,
}

impl ListQuery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            filter: None,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }

    /// `field IN v1,v2,...`
    pub fn filter_in<S: AsRef<str>>(mut self, field: &str, values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.filter = Some(format!("{field} IN {joined}"));
        self
    }

    pub fn results_per_page(mut self, results_per_page: u32) -> Self {
        self.results_per_page = results_per_page;
        self
    }

    pub fn to_path(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        if let Some(filter) = &self.filter {
            params.append_pair("q", filter);
        }
        params.append_pair("results-per-page", &self.results_per_page.to_string());

        format!("{}?{}", self.endpoint, params.finish())
    }
}
