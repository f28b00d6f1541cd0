use std::rc::Rc;

use dioxus::prelude::*;
use ic_core::{AuthProvider, SessionState};

/// Provide the session signal to the tree and resolve the current user on mount.
///
/// The signal starts in the loading state; guards must not judge absence
/// until it settles.
pub fn use_auth_provider(provider: Rc<dyn AuthProvider>) -> Signal<SessionState> {
    let mut auth = use_signal(SessionState::default);
    use_context_provider(|| auth);

    use_effect(move || {
        let provider = provider.clone();
        spawn(async move {
            let state = match provider.current_user().await {
                Ok(Some(user)) => SessionState::signed_in(user),
                Ok(None) => SessionState::signed_out(),
                Err(e) => {
                    tracing::warn!(error = %e, "could not resolve current user");
                    SessionState::signed_out()
                }
            };
            auth.set(state);
        });
    });

    auth
}
