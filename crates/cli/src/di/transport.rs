use routefinder_application::ports::ApiTransport;
use routefinder_domain::ApiConfig;
use routefinder_infrastructure::api::CloudControllerClient;
use routefinder_infrastructure::system::CfCliSession;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Builds the API transport, filling a missing url or token from the cf CLI session.
pub fn build_transport(config: &ApiConfig) -> anyhow::Result<Arc<dyn ApiTransport>> {
    let session = if config.url.is_none() || config.token.is_none() {
        match CfCliSession::load(config.cf_home.as_deref()) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "cf CLI session unavailable");
                None
            }
        }
    } else {
        None
    };

    let url = config
        .url
        .clone()
        .or_else(|| session.as_ref().and_then(|s| s.target()).map(str::to_string))
        .ok_or_else(|| {
            anyhow::anyhow!("No API endpoint configured: set api.url, pass --api, or run `cf login`")
        })?;

    let token = config.token.clone().or_else(|| {
        session
            .as_ref()
            .and_then(|s| s.access_token())
            .map(str::to_string)
    });
    if token.is_none() {
        warn!("No access token available, requests will be unauthenticated");
    }

    let skip_ssl_validation =
        config.skip_ssl_validation || session.as_ref().is_some_and(|s| s.ssl_disabled);

    info!(api = %url, skip_ssl_validation, "Using Cloud Controller API");

    let client = CloudControllerClient::new(
        &url,
        token,
        Duration::from_secs(config.timeout_secs),
        skip_ssl_validation,
        &config.user_agent,
    )?;

    Ok(Arc::new(client))
}
