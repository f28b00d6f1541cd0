use dioxus::prelude::*;
use ic_core::{SessionState, SignOutOutcome, sign_out};

use crate::{
    app::services::use_services,
    components::{ToastMessage, use_toast},
};

/// Get current session state from context
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Returns a callback that signs out, shows the farewell toast and goes to
/// the landing page. A refused sign-out does nothing visible.
pub fn use_sign_out() -> Callback<()> {
    let services = use_services();
    let mut auth = use_auth();
    let mut toast = use_toast();
    let navigator = use_navigator();

    use_callback(move |_| {
        let provider = services.auth.clone();
        spawn(async move {
            if let SignOutOutcome::SignedOut { notice, redirect } = sign_out(&*provider).await {
                // Leave the guarded page before the guard can see the signed-out state
                navigator.push(redirect.path());
                auth.set(SessionState::signed_out());
                toast.set(Some(ToastMessage::success_notice(&notice)));
            }
        });
    })
}
