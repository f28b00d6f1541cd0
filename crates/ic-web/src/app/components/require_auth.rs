use dioxus::prelude::*;
use ic_core::{GateDecision, gate};

use crate::app::auth::hooks::use_auth;

/// Route guard for content pages.
///
/// Renders nothing while the session is still resolving, redirects to the
/// sign-in route once it settles without a user.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();

    use_effect(move || {
        if let GateDecision::Redirect(route) = gate(&auth.read()) {
            nav.push(route.path());
        }
    });

    match gate(&auth.read()) {
        GateDecision::Render => rsx! { {children} },
        GateDecision::Wait | GateDecision::Redirect(_) => rsx! {},
    }
}
