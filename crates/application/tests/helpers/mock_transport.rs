use async_trait::async_trait;
use routefinder_application::ports::ApiTransport;
use routefinder_domain::DomainError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Serves canned bodies keyed by request path and records every request.
#[derive(Clone)]
pub struct MockApiTransport {
    responses: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, DomainError>>>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockApiTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_response(&self, path: &str, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(path.to_string(), body.into());
    }

    pub fn set_failure(&self, path: &str, error: DomainError) {
        self.failures
            .write()
            .unwrap()
            .insert(path.to_string(), error);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn was_requested(&self, prefix: &str) -> bool {
        self.requests
            .read()
            .unwrap()
            .iter()
            .any(|path| path.starts_with(prefix))
    }
}

#[async_trait]
impl ApiTransport for MockApiTransport {
    async fn get(&self, path: &str) -> Result<String, DomainError> {
        self.requests.write().unwrap().push(path.to_string());

        if let Some(error) = self.failures.read().unwrap().get(path) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::Transport(format!("HTTP 404 for {}", path)))
    }
}
