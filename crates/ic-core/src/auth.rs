//! Authentication provider seam and its REST implementation.

use std::sync::RwLock;

use async_trait::async_trait;
use ic_types::{AuthSession, AuthUser, SignInRequest};

use crate::{
    client::BackendClient,
    error::{PortalError, PortalResult},
};

/// Identity operations the pages depend on.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// User of the current session, `None` when signed out or the session
    /// is no longer accepted by the provider.
    async fn current_user(&self) -> PortalResult<Option<AuthUser>>;

    async fn sign_in_with_password(&self, request: &SignInRequest) -> PortalResult<AuthUser>;

    /// End the current session. On error the session is left in place.
    async fn sign_out(&self) -> PortalResult<()>;
}

/// Where the session survives page reloads.
pub trait SessionPersistence {
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession);
    fn clear(&self);
}

/// In-process persistence, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    session: RwLock<Option<AuthSession>>,
}

impl MemoryPersistence {
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<AuthSession> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: &AuthSession) {
        if let Ok(mut guard) = self.session.write() {
            *guard = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.session.write() {
            *guard = None;
        }
    }
}

/// [`AuthProvider`] talking to the project's `/auth/v1` endpoints.
///
/// The session itself lives in the shared [`BackendClient`], so store
/// requests pick up sign-in, refresh and sign-out immediately.
#[derive(Clone, Debug)]
pub struct RestAuth {
    client: BackendClient,
}

impl RestAuth {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthProvider for RestAuth {
    async fn current_user(&self) -> PortalResult<Option<AuthUser>> {
        if self.client.fresh_session().await?.is_none() {
            return Ok(None);
        }

        let url = self.client.endpoint("auth/v1/user")?;
        match BackendClient::send_json::<AuthUser>(self.client.get(url)).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => {
                tracing::info!("stored session rejected by auth provider");
                self.client.store_session(None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in_with_password(&self, request: &SignInRequest) -> PortalResult<AuthUser> {
        let url = self.client.endpoint("auth/v1/token?grant_type=password")?;
        let session: AuthSession = BackendClient::send_json(self.client.post(url).json(request)).await?;
        let user = session.user.clone();
        tracing::info!(user = %user, "signed in");
        self.client.store_session(Some(session));
        Ok(user)
    }

    async fn sign_out(&self) -> PortalResult<()> {
        if self.client.current_session().is_none() {
            return Err(PortalError::NotSignedIn);
        }
        let url = self.client.endpoint("auth/v1/logout")?;
        match BackendClient::send(self.client.post(url)).await {
            Ok(_) => tracing::info!("signed out"),
            // Token already dead on the provider side; only the local copy is left
            Err(e) if e.is_unauthorized() || e.status() == Some(404) => {
                tracing::info!(error = %e, "session already ended upstream, clearing locally");
            }
            Err(e) => return Err(e),
        }
        self.client.store_session(None);
        Ok(())
    }
}
