//! Shared HTTP plumbing for the REST store and auth clients.

use std::{
    fmt,
    sync::{Arc, RwLock},
};

use ic_types::{AuthSession, PortalConfig};
use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    auth::{MemoryPersistence, SessionPersistence},
    error::{PortalError, PortalResult},
};

/// Current session, shared between the auth provider (which writes it) and
/// the store (which reads its bearer token).
pub type SharedSession = Arc<RwLock<Option<AuthSession>>>;

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Thin wrapper over `reqwest::Client` that knows the project URL and key.
///
/// Clones share the session and its persistence, so the store and the auth
/// provider always agree on who is signed in.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
    anon_key: String,
    session: SharedSession,
    persistence: Arc<dyn SessionPersistence>,
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base", &self.base.as_str())
            .field("signed_in", &self.current_session().is_some())
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    pub fn new(config: &PortalConfig) -> PortalResult<Self> {
        config.validate()?;
        // Trailing slash so relative joins append instead of replacing the last segment
        let base = Url::parse(&format!("{}/", config.backend_url.trim_end_matches('/')))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            anon_key: config.anon_key.clone(),
            session: SharedSession::default(),
            persistence: Arc::new(MemoryPersistence::default()),
        })
    }

    /// Keep the session in `persistence` and restore whatever it holds.
    pub fn with_persistence(mut self, persistence: Arc<dyn SessionPersistence>) -> Self {
        self.set_session(persistence.load());
        self.persistence = persistence;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn session(&self) -> SharedSession {
        self.session.clone()
    }

    pub fn current_session(&self) -> Option<AuthSession> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    pub fn set_session(&self, session: Option<AuthSession>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = session;
        }
    }

    /// Replace the session in memory and in persistence.
    pub fn store_session(&self, session: Option<AuthSession>) {
        match &session {
            Some(s) => self.persistence.save(s),
            None => self.persistence.clear(),
        }
        self.set_session(session);
    }

    /// Current session, refreshed first when its access token has expired.
    ///
    /// A session the provider refuses to refresh is dropped and `None`
    /// returned. Transport failures leave it in place.
    pub async fn fresh_session(&self) -> PortalResult<Option<AuthSession>> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };
        if !session.is_expired(chrono::Utc::now().timestamp()) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            tracing::info!("session expired without refresh token");
            self.store_session(None);
            return Ok(None);
        };
        match self.refresh(refresh_token).await {
            Ok(session) => Ok(Some(session)),
            Err(e @ PortalError::Http { .. }) => {
                tracing::warn!(error = %e, "session refresh refused");
                self.store_session(None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> PortalResult<AuthSession> {
        let url = self.endpoint("auth/v1/token?grant_type=refresh_token")?;
        // The expired bearer must not go along; the refresh grant only needs the key
        let request = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&RefreshRequest { refresh_token });
        let session: AuthSession = Self::send_json(request).await?;
        tracing::debug!(user = %session.user, "session refreshed");
        self.store_session(Some(session.clone()));
        Ok(session)
    }

    pub fn endpoint(&self, path: &str) -> PortalResult<Url> {
        Ok(self.base.join(path)?)
    }

    /// Signed-in access token, falling back to the anon key.
    fn bearer(&self) -> String {
        self.current_session().map(|s| s.access_token).unwrap_or_else(|| self.anon_key.clone())
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url).header("apikey", &self.anon_key).bearer_auth(self.bearer())
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url).header("apikey", &self.anon_key).bearer_auth(self.bearer())
    }

    /// Send `request` and decode a JSON body, mapping non-2xx statuses to
    /// [`PortalError::Http`].
    pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> PortalResult<T> {
        let response = Self::send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn send(request: RequestBuilder) -> PortalResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PortalError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
