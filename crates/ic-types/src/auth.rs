use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Identity of the signed-in user as reported by the auth provider.
pub struct AuthUser {
    /// Stable user identifier.
    pub id: Uuid,
    /// Email address, absent for phone or anonymous sign-ins.
    #[serde(default)]
    pub email: Option<String>,
}

impl std::fmt::Display for AuthUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{}", email),
            None => write!(f, "{}", self.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Token bundle returned by a successful sign-in and persisted between page loads.
pub struct AuthSession {
    /// Bearer token sent with every store request.
    pub access_token: String,
    /// Token used to obtain a fresh access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) at which `access_token` expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// User the tokens belong to.
    pub user: AuthUser,
}

impl AuthSession {
    /// Whether the access token is past its expiry at `now` (unix seconds).
    /// Sessions without an expiry never report as expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Email/password credentials submitted by the sign-in form.
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parses_token_response() {
        let json = r#"{
            "access_token": "eyJ.abc.def",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1700003600,
            "refresh_token": "r-123",
            "user": { "id": "9a7b5c3d-1e2f-4a6b-8c0d-e1f2a3b4c5d6", "email": "etudiant@ifri.bj", "role": "authenticated" }
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.email.as_deref(), Some("etudiant@ifri.bj"));
        assert!(!session.is_expired(1_700_000_000));
        assert!(session.is_expired(1_700_003_600));
        assert_eq!(session.user.to_string(), "etudiant@ifri.bj");
    }
}
