use async_trait::async_trait;
use routefinder_domain::DomainError;

/// Authenticated, read-only access to the platform API.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issues a GET for `path` (relative to the API root) and returns the raw body.
    async fn get(&self, path: &str) -> Result<String, DomainError>;
}
