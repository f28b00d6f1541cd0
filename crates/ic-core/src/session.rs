//! Session gate shared by every page.

use ic_types::AuthUser;

use crate::{auth::AuthProvider, nav::Route};

/// Identity as observed by the pages.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Whether data fetches may be issued.
    pub fn can_fetch(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

/// What a gated page does for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Still resolving; render nothing.
    Wait,
    Redirect(Route),
    Render,
}

/// Absence only counts once loading has settled, so an initial load never
/// flashes a redirect.
pub fn gate(state: &SessionState) -> GateDecision {
    if state.loading {
        GateDecision::Wait
    } else if state.user.is_none() {
        GateDecision::Redirect(Route::Auth)
    } else {
        GateDecision::Render
    }
}

/// Transient confirmation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut { notice: Notice, redirect: Route },
    /// Provider refused; the user stays signed in and nothing is shown.
    Failed,
}

pub async fn sign_out<A: AuthProvider + ?Sized>(auth: &A) -> SignOutOutcome {
    match auth.sign_out().await {
        Ok(()) => SignOutOutcome::SignedOut {
            notice: Notice {
                title: "Déconnexion réussie".to_string(),
                description: "À bientôt !".to_string(),
            },
            redirect: Route::Landing,
        },
        Err(e) => {
            tracing::warn!(error = %e, "sign-out failed");
            SignOutOutcome::Failed
        }
    }
}
