//! Configuration for the portal front end.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default storage key under which the signed-in session is persisted.
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "ic-auth-session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("backend url is empty")]
    MissingBackendUrl,
    #[error("backend url must start with http:// or https://, got '{0}'")]
    InvalidBackendUrl(String),
    #[error("backend anon key is empty")]
    MissingAnonKey,
}

/// Connection settings for the backend-as-a-service project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co`. Table and auth
    /// endpoints are resolved relative to it.
    pub backend_url: String,
    /// Publishable key sent as `apikey` on every request.
    pub anon_key: String,
    /// Browser storage key holding the persisted session.
    pub session_storage_key: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:54321".to_string(),
            anon_key: String::new(),
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
        }
    }
}

impl PortalConfig {
    /// Build from optional overrides, keeping defaults for anything unset or blank.
    pub fn from_overrides(backend_url: Option<&str>, anon_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = backend_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = anon_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.anon_key = key.to_string();
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::MissingBackendUrl);
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(self.backend_url.clone()));
        }
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::MissingAnonKey);
        }
        Ok(())
    }
}
