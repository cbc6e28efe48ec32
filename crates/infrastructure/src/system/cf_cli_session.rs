use routefinder_domain::DomainError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Target and token of a logged-in cf CLI, read from `.cf/config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CfCliSession {
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub access_token: String,

    #[serde(default, rename = "SSLDisabled")]
    pub ssl_disabled: bool,
}

impl CfCliSession {
    /// `<cf_home>/.cf/config.json`, with `cf_home` defaulting to `$CF_HOME`, then `$HOME`.
    pub fn config_path(cf_home: Option<&str>) -> Option<PathBuf> {
        cf_home
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("CF_HOME").map(PathBuf::from))
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .map(|home| home.join(".cf").join("config.json"))
    }

    pub fn load(cf_home: Option<&str>) -> Result<Self, DomainError> {
        let path = Self::config_path(cf_home).ok_or_else(|| {
            DomainError::Session(
                "cannot locate cf CLI config: neither CF_HOME nor HOME is set".to_string(),
            )
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Session(format!("failed to read {}: {}", path.display(), e))
        })?;
        let session: Self = serde_json::from_str(&contents).map_err(|e| {
            DomainError::Session(format!("failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            target = %session.target,
            logged_in = session.access_token().is_some(),
            "cf CLI session loaded"
        );
        Ok(session)
    }

    pub fn target(&self) -> Option<&str> {
        Some(self.target.trim()).filter(|t| !t.is_empty())
    }

    pub fn access_token(&self) -> Option<&str> {
        Some(self.access_token.trim()).filter(|t| !t.is_empty())
    }
}
