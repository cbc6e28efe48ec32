//! Cloud Controller HTTP transport
//!
//! Issues authenticated GETs against the platform API. Request paths are
//! relative to the API root, which is also how the API writes `next_url`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use routefinder_application::ports::ApiTransport;
use routefinder_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Longest slice of an error body carried into a transport error.
const MAX_ERROR_BODY: usize = 256;

pub struct CloudControllerClient {
    base_url: String,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl CloudControllerClient {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
        skip_ssl_validation: bool,
        user_agent: &str,
    ) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .danger_accept_invalid_certs(skip_ssl_validation)
            .build()
            .map_err(|e| DomainError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(|t| authorization_value(&t)),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// cf stores tokens as `bearer <jwt>`; bare tokens get the scheme prepended.
pub fn authorization_value(token: &str) -> String {
    let token = token.trim();
    match token.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => token.to_string(),
        _ => format!("bearer {}", token),
    }
}

fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl ApiTransport for CloudControllerClient {
    async fn get(&self, path: &str) -> Result<String, DomainError> {
        let url = self.url_for(path);
        debug!(url = %url, "GET");

        let mut request = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("GET {}: {}", path, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("read error for {}: {}", path, e)))?;

        if !status.is_success() {
            return Err(DomainError::Transport(format!(
                "HTTP {} for {}: {}",
                status.as_u16(),
                path,
                truncate_body(body.trim())
            )));
        }

        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "GET complete");
        Ok(body)
    }
}
