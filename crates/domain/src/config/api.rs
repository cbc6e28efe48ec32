use serde::{Deserialize, Serialize};

/// Cloud Controller API access settings.
///
/// `url` and `token` fall back to the cf CLI session when left unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub skip_ssl_validation: bool,

    /// Directory holding the cf CLI `.cf/config.json`. Defaults to `$CF_HOME`, then `$HOME`.
    #[serde(default)]
    pub cf_home: Option<String>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout_secs: default_timeout_secs(),
            skip_ssl_validation: false,
            cf_home: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("routefinder/{}", env!("CARGO_PKG_VERSION"))
}
